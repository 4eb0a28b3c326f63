use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Light or dark color scheme, the one preference folio persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// Pick the theme to start with: a saved choice wins, then the
    /// environment's preference, then the configured default, then dark.
    pub fn resolve(
        saved: Option<ThemePreference>,
        prefers_dark: Option<bool>,
        configured: Option<ThemePreference>,
    ) -> ThemePreference {
        if let Some(theme) = saved {
            return theme;
        }
        match prefers_dark {
            Some(true) => ThemePreference::Dark,
            Some(false) => ThemePreference::Light,
            None => configured.unwrap_or(ThemePreference::Dark),
        }
    }

    pub fn toggle(self) -> ThemePreference {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("unknown theme \"{}\" (expected light or dark)", other)),
        }
    }
}

/// Read the terminal's background hint from `COLORFGBG` ("fg;bg" or
/// "fg;other;bg"). Returns None when the variable is absent or unreadable.
pub fn prefers_dark_from_colorfgbg(value: Option<&str>) -> Option<bool> {
    let bg: u8 = value?.rsplit(';').next()?.trim().parse().ok()?;
    // ANSI 0-6 and 8 are dark backgrounds, 7 and 9-15 light
    Some(matches!(bg, 0..=6 | 8))
}

/// The environment's dark-mode preference, if it expresses one
pub fn detect_prefers_dark() -> Option<bool> {
    let value = std::env::var("COLORFGBG").ok();
    prefers_dark_from_colorfgbg(value.as_deref())
}
