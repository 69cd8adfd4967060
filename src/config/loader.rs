//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::schema::Settings;
use crate::error::{LcnsError, Result};

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "lcns";

/// Settings file name.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Location of the user settings file, e.g. `~/.config/lcns/config.yml`.
pub fn config_path() -> Option<PathBuf> {
    Some(
        dirs::config_dir()?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME),
    )
}

/// Load settings from the default location.
///
/// A missing file (or no config directory at all) yields default settings.
pub fn load_settings() -> Result<Settings> {
    match config_path() {
        Some(path) => load_settings_file(&path),
        None => {
            debug!("No config directory; using default settings");
            Ok(Settings::default())
        }
    }
}

/// Load settings from `path`. A missing file yields default settings.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No settings file at {}", path.display());
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(LcnsError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    debug!("Loading settings from {}", path.display());
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// `source_path` is only used for error reporting.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings =
        serde_yaml::from_str(content).map_err(|e| LcnsError::ConfigParse {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    settings
        .cache_ttl()
        .map_err(|e| LcnsError::ConfigParse {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(settings)
}
