//! Host key/value storage.
//!
//! The options accessor never touches persistence directly. It talks to an
//! [`OptionStorage`] implementation, the same four primitives a hosting
//! platform offers for named option slots:
//!
//! - [`OptionStorage::get`] - read a slot
//! - [`OptionStorage::add`] - create a slot, never overwriting
//! - [`OptionStorage::update`] - replace a slot, creating it when absent
//! - [`OptionStorage::delete`] - remove a slot
//!
//! Two hosts are bundled: [`MemoryStorage`] for tests and embedding, and
//! [`FileStorage`] which keeps the whole table in one JSON document.

pub mod file;
pub mod memory;
pub mod table;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use table::{OptionTable, StoredOption};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::Result;

/// Host-side hint for eagerly loading a slot at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Autoload {
    #[default]
    Yes,
    No,
}

impl From<bool> for Autoload {
    fn from(autoload: bool) -> Self {
        if autoload {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl fmt::Display for Autoload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

/// Persistence primitives provided by the host.
///
/// Boolean results report whether the host applied the change. Errors are
/// reserved for failures of the host itself.
pub trait OptionStorage {
    /// Read the value stored under `key`, or `None` if the slot does not exist.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Create `key` with `value`. Returns `false` if the slot already exists.
    fn add(&self, key: &str, value: Value, description: &str, autoload: Autoload)
        -> Result<bool>;

    /// Replace the value under `key`.
    ///
    /// Returns `false` when the stored value is already equal to `value`.
    /// An absent slot is created.
    fn update(&self, key: &str, value: Value) -> Result<bool>;

    /// Remove `key`. Returns `false` if the slot did not exist.
    fn delete(&self, key: &str) -> Result<bool>;
}

impl<S: OptionStorage + ?Sized> OptionStorage for &S {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn add(
        &self,
        key: &str,
        value: Value,
        description: &str,
        autoload: Autoload,
    ) -> Result<bool> {
        (**self).add(key, value, description, autoload)
    }

    fn update(&self, key: &str, value: Value) -> Result<bool> {
        (**self).update(key, value)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        (**self).delete(key)
    }
}

impl<S: OptionStorage + ?Sized> OptionStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn add(
        &self,
        key: &str,
        value: Value,
        description: &str,
        autoload: Autoload,
    ) -> Result<bool> {
        (**self).add(key, value, description, autoload)
    }

    fn update(&self, key: &str, value: Value) -> Result<bool> {
        (**self).update(key, value)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        (**self).delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoload_from_bool() {
        assert_eq!(Autoload::from(true), Autoload::Yes);
        assert_eq!(Autoload::from(false), Autoload::No);
    }

    #[test]
    fn autoload_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Autoload::No).unwrap(), "\"no\"");
        let parsed: Autoload = serde_json::from_str("\"yes\"").unwrap();
        assert_eq!(parsed, Autoload::Yes);
    }

    #[test]
    fn autoload_display() {
        assert_eq!(Autoload::Yes.to_string(), "yes");
        assert_eq!(Autoload::No.to_string(), "no");
    }

    #[test]
    fn borrowed_storage_delegates() {
        let storage = MemoryStorage::new();
        let borrowed = &storage;
        assert!(borrowed
            .add("k", Value::from(1), "", Autoload::No)
            .unwrap());
        assert_eq!(storage.get("k").unwrap(), Some(Value::from(1)));
    }

    #[test]
    fn boxed_storage_delegates() {
        let boxed: Box<dyn OptionStorage> = Box::new(MemoryStorage::new());
        assert!(boxed.update("k", Value::from("v")).unwrap());
        assert!(boxed.delete("k").unwrap());
        assert!(boxed.get("k").unwrap().is_none());
    }
}
