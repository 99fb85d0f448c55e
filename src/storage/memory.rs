//! In-process host storage.

use serde_json::Value;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;

use super::{Autoload, OptionStorage, OptionTable};

/// Host storage kept in memory.
///
/// Clones share the same table, so several accessors can observe one
/// simulated host database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    table: Arc<RwLock<OptionTable>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage seeded with an existing table.
    pub fn from_table(table: OptionTable) -> Self {
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Take a copy of the current table.
    pub fn snapshot(&self) -> OptionTable {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, OptionTable> {
        self.table.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, OptionTable> {
        self.table
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OptionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read().get(key).cloned())
    }

    fn add(
        &self,
        key: &str,
        value: Value,
        description: &str,
        autoload: Autoload,
    ) -> Result<bool> {
        Ok(self.write().add(key, value, description, autoload))
    }

    fn update(&self, key: &str, value: Value) -> Result<bool> {
        Ok(self.write().update(key, value))
    }

    fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.write().delete(key))
    }
}
