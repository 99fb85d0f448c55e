//! Settings file discovery and loading.
//!
//! Settings are layered in priority order (later overrides earlier):
//! 1. Built-in defaults
//! 2. User global settings (`~/.simmer/config.yml`)
//! 3. Explicit settings file (`--config`)
//! 4. Environment variables

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings::{Settings, SettingsLayer};
use crate::error::{OptionsError, Result};

/// Paths to settings files in merge order.
#[derive(Debug, Clone, Default)]
pub struct SettingsPaths {
    /// User's global settings: ~/.simmer/config.yml
    pub user_global: Option<PathBuf>,

    /// File passed on the command line. Must exist.
    pub explicit: Option<PathBuf>,
}

impl SettingsPaths {
    /// Discover settings files, adding an explicit path if given.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            user_global: Self::find_user_global(),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Find user's global settings at ~/.simmer/config.yml
    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".simmer").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }
}

/// Load a single settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<SettingsLayer> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OptionsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            OptionsError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Parse YAML content into a settings layer.
///
/// An empty document is an empty layer.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<SettingsLayer> {
    if content.trim().is_empty() {
        return Ok(SettingsLayer::default());
    }

    serde_yaml::from_str(content).map_err(|e| OptionsError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve settings from files only.
pub fn load_settings_from(paths: &SettingsPaths) -> Result<Settings> {
    let mut settings = Settings::default();

    for path in paths.user_global.iter().chain(paths.explicit.iter()) {
        tracing::debug!("Loading settings from {:?}", path);
        settings.apply(load_settings_file(path)?);
    }

    Ok(settings)
}

/// Resolve settings from files and the process environment.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let paths = SettingsPaths::discover(explicit);
    let mut settings = load_settings_from(&paths)?;
    settings.apply_env(|key| std::env::var(key).ok())?;
    Ok(settings)
}
