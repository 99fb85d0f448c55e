//! Process-local cache of the options record.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Options;

/// How writes interact with the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Successful writes replace the cached record.
    #[default]
    WriteThrough,
    /// The record is loaded once; writes leave the cache untouched until
    /// it is explicitly cleared.
    ReadOnce,
}

impl FromStr for CachePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "write_through" => Ok(Self::WriteThrough),
            "read_once" => Ok(Self::ReadOnce),
            _ => Err(format!("unknown cache policy: {}", s)),
        }
    }
}

impl CachePolicy {
    /// Check if writes should refresh the cache.
    pub fn refreshes_on_write(&self) -> bool {
        matches!(self, Self::WriteThrough)
    }
}

/// Shared handle to a cached options record.
///
/// Cloning the handle shares the cached value, so every accessor built from
/// the same handle reads the same record.
#[derive(Debug, Clone, Default)]
pub struct OptionsCache {
    slot: Arc<RwLock<Option<Options>>>,
}

impl OptionsCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the cached record, if loaded.
    pub fn get(&self) -> Option<Options> {
        self.read().clone()
    }

    /// Replace the cached record.
    pub fn store(&self, options: Options) {
        *self.write() = Some(options);
    }

    /// Drop the cached record so the next read goes to storage.
    pub fn clear(&self) {
        *self.write() = None;
    }

    /// Check if a record is cached.
    pub fn is_loaded(&self) -> bool {
        self.read().is_some()
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Options>> {
        self.slot.read().unwrap_or_else(|poisoned| {
            tracing::warn!("Options cache lock was poisoned; reusing cached value");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Options>> {
        self.slot.write().unwrap_or_else(|poisoned| {
            tracing::warn!("Options cache lock was poisoned; reusing cached value");
            poisoned.into_inner()
        })
    }
}
