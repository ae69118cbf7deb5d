//! XDG-compliant lookup of the settings file and `.env` loading.

use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::paths;

/// Find the settings file.
/// Priority:
/// 1. Explicit path (from `--config` or `REPO_BOOTSTRAP_CONFIG`), used even if missing
/// 2. Current directory/repo-bootstrap.toml
/// 3. XDG_CONFIG_HOME/repo-bootstrap/config.toml (if XDG_CONFIG_HOME is set)
/// 4. ~/.config/repo-bootstrap/config.toml (default XDG location)
///
/// Returns `None` when no settings file exists, in which case defaults apply.
pub fn find_settings_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let candidates = [
        env::current_dir()
            .ok()
            .map(|dir| dir.join(paths::LOCAL_SETTINGS_FILE)),
        env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|v| !v.is_empty())
            .map(|home| {
                PathBuf::from(home)
                    .join(paths::APP_DIR)
                    .join(paths::SETTINGS_FILE)
            }),
        dirs::home_dir().map(|home| {
            home.join(".config")
                .join(paths::APP_DIR)
                .join(paths::SETTINGS_FILE)
        }),
    ];

    let found = candidates.into_iter().flatten().find(|p| p.is_file());
    debug!(settings = ?found, "settings file lookup");
    found
}

/// Load `.env` from the current directory, if present.
pub fn load_env_file() {
    let env_file = PathBuf::from(".env");
    if env_file.is_file() {
        let _ = dotenv::from_path(&env_file);
    }
}
