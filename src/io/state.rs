use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::site_io::atomic_write;
use crate::model::preference::ThemePreference;

/// File name of the persisted preferences, inside `folio/`
pub const STATE_FILE: &str = ".state.json";

/// Persisted UI state (written to .state.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Theme chosen by the user, None until they pick one
    #[serde(default)]
    pub theme: Option<ThemePreference>,
}

/// Read .state.json from the site directory. Missing or malformed files read
/// as "nothing saved".
pub fn read_ui_state(site_dir: &Path) -> Option<UiState> {
    let path = site_dir.join(STATE_FILE);
    let content = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed state file");
            None
        }
    }
}

/// Write .state.json to the site directory
pub fn write_ui_state(site_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = site_dir.join(STATE_FILE);
    let content = serde_json::to_string_pretty(state)?;
    atomic_write(&path, content.as_bytes())
}

/// The saved theme, if any
pub fn saved_theme(site_dir: Option<&Path>) -> Option<ThemePreference> {
    read_ui_state(site_dir?)?.theme
}

/// Persist the theme choice. Sites without a directory keep it in memory
/// only; write failures are logged and otherwise ignored.
pub fn save_theme(site_dir: Option<&Path>, theme: ThemePreference) {
    let Some(dir) = site_dir else {
        tracing::debug!(%theme, "no site directory, theme not persisted");
        return;
    };
    let mut state = read_ui_state(dir).unwrap_or_default();
    state.theme = Some(theme);
    match write_ui_state(dir, &state) {
        Ok(()) => tracing::info!(%theme, "saved theme preference"),
        Err(e) => tracing::warn!(error = %e, "could not save theme preference"),
    }
}
