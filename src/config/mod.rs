//! Tool settings: where the option store lives and how it is accessed.
//!
//! - Schema and environment overrides in [`settings`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use simmer_options::config::{load_settings_file, Settings};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "autoload: true").unwrap();
//!
//! let mut settings = Settings::default();
//! settings.apply(load_settings_file(&path).unwrap());
//! assert!(settings.autoload);
//! ```

pub mod loader;
pub mod settings;

pub use loader::{
    load_settings, load_settings_file, load_settings_from, parse_settings, SettingsPaths,
};
pub use settings::{Settings, SettingsLayer, CACHE_POLICY_ENV, STORE_ENV};
