use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::preference::ThemePreference;

/// Configuration from site.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    #[serde(default)]
    pub stats: Vec<StatConfig>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// Catalog file, relative to the `folio/` directory
    #[serde(default = "default_catalog")]
    pub catalog: String,
}

/// Default: see the `folio init` template
fn default_catalog() -> String {
    "projects.toml".to_string()
}

/// A headline number that counts up when the gallery opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatConfig {
    pub label: String,
    #[serde(default)]
    pub count_to: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme used when neither a saved preference nor the terminal says otherwise
    #[serde(default)]
    pub default_theme: Option<ThemePreference>,
    /// Dark palette overrides, `"#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Light palette overrides, `"#RRGGBB"`
    #[serde(default)]
    pub light_colors: HashMap<String, String>,
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
}

impl SiteConfig {
    /// Config used when running without a `folio/` directory
    pub fn builtin() -> Self {
        SiteConfig {
            site: SiteInfo {
                name: "Portfolio".to_string(),
                tagline: String::new(),
                catalog: default_catalog(),
            },
            stats: Vec::new(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: SiteConfig = toml::from_str("[site]\nname = \"Mine\"\n").unwrap();
        assert_eq!(config.site.name, "Mine");
        assert_eq!(config.site.catalog, "projects.toml");
        assert!(config.stats.is_empty());
        assert!(config.ui.default_theme.is_none());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let text = r##"[site]
name = "Studio"
tagline = "Games and tools"
catalog = "data/work.json"

[[stats]]
label = "Shipped games"
count_to = 7

[[stats]]
label = "Jams"

[ui]
default_theme = "light"

[ui.colors]
background = "#000000"

[ui.tag_colors]
Unity = "#FF4444"
"##;
        let config: SiteConfig = toml::from_str(text).unwrap();
        assert_eq!(config.site.tagline, "Games and tools");
        assert_eq!(config.site.catalog, "data/work.json");
        assert_eq!(config.stats.len(), 2);
        assert_eq!(config.stats[0].count_to, 7);
        assert_eq!(config.stats[1].count_to, 0);
        assert_eq!(config.ui.default_theme, Some(ThemePreference::Light));
        assert_eq!(config.ui.tag_colors.get("Unity").unwrap(), "#FF4444");
    }

    #[test]
    fn missing_site_section_is_an_error() {
        assert!(toml::from_str::<SiteConfig>("[ui]\n").is_err());
    }
}
