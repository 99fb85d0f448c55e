//! Settings schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{OptionsError, Result};
use crate::options::CachePolicy;
use crate::storage::FileStorage;

/// Environment variable overriding the store location.
pub const STORE_ENV: &str = "SIMMER_OPTIONS_STORE";

/// Environment variable overriding the cache policy.
pub const CACHE_POLICY_ENV: &str = "SIMMER_OPTIONS_CACHE_POLICY";

/// Resolved tool settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Settings {
    /// Location of the JSON option store.
    pub store: Option<PathBuf>,

    /// How writes interact with the options cache.
    pub cache_policy: CachePolicy,

    /// Autoload flag used when creating the record.
    pub autoload: bool,
}

/// One settings file. Absent fields leave lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsLayer {
    #[serde(default)]
    pub store: Option<PathBuf>,

    #[serde(default)]
    pub cache_policy: Option<CachePolicy>,

    #[serde(default)]
    pub autoload: Option<bool>,
}

impl Settings {
    /// Path of the option store, falling back to the platform data dir.
    pub fn store_path(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(FileStorage::default_path)
    }

    /// Apply a settings layer on top of the current values.
    pub fn apply(&mut self, layer: SettingsLayer) {
        if let Some(store) = layer.store {
            self.store = Some(store);
        }
        if let Some(policy) = layer.cache_policy {
            self.cache_policy = policy;
        }
        if let Some(autoload) = layer.autoload {
            self.autoload = autoload;
        }
    }

    /// Apply environment overrides using the given variable lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store) = lookup(STORE_ENV).filter(|s| !s.is_empty()) {
            self.store = Some(PathBuf::from(store));
        }

        if let Some(policy) = lookup(CACHE_POLICY_ENV).filter(|s| !s.is_empty()) {
            self.cache_policy = policy
                .parse()
                .map_err(|message| OptionsError::InvalidValue { message })?;
        }

        Ok(())
    }
}
