//! In-memory option table shared by the bundled hosts.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::Autoload;

/// A single slot as the host keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredOption {
    /// The stored value.
    pub value: Value,

    /// Whether the host should load this slot eagerly.
    #[serde(default)]
    pub autoload: Autoload,

    /// Free-form description supplied at creation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Table of named slots with host add/update/delete semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionTable {
    /// Schema version of the serialized table.
    #[serde(default = "OptionTable::current_version")]
    pub version: u32,

    /// Slots keyed by name.
    #[serde(default)]
    pub options: BTreeMap<String, StoredOption>,
}

impl OptionTable {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    fn current_version() -> u32 {
        Self::CURRENT_VERSION
    }

    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            options: BTreeMap::new(),
        }
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key).map(|slot| &slot.value)
    }

    /// Get the full slot stored under `key`.
    pub fn slot(&self, key: &str) -> Option<&StoredOption> {
        self.options.get(key)
    }

    /// Create a slot. Existing slots are left untouched.
    pub fn add(&mut self, key: &str, value: Value, description: &str, autoload: Autoload) -> bool {
        if self.options.contains_key(key) {
            return false;
        }

        self.options.insert(
            key.to_string(),
            StoredOption {
                value,
                autoload,
                description: description.to_string(),
            },
        );
        true
    }

    /// Replace a slot's value, creating the slot when absent.
    pub fn update(&mut self, key: &str, value: Value) -> bool {
        match self.options.get_mut(key) {
            Some(slot) if slot.value == value => false,
            Some(slot) => {
                slot.value = value;
                true
            }
            None => self.add(key, value, "", Autoload::Yes),
        }
    }

    /// Remove a slot.
    pub fn delete(&mut self, key: &str) -> bool {
        self.options.remove(key).is_some()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if the table has no slots.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for OptionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_creates_slot() {
        let mut table = OptionTable::new();
        assert!(table.add("slot", json!({"a": 1}), "desc", Autoload::No));

        let slot = table.slot("slot").unwrap();
        assert_eq!(slot.value, json!({"a": 1}));
        assert_eq!(slot.autoload, Autoload::No);
        assert_eq!(slot.description, "desc");
    }

    #[test]
    fn add_does_not_overwrite() {
        let mut table = OptionTable::new();
        table.add("slot", json!(1), "", Autoload::No);

        assert!(!table.add("slot", json!(2), "", Autoload::Yes));
        assert_eq!(table.get("slot"), Some(&json!(1)));
        assert_eq!(table.slot("slot").unwrap().autoload, Autoload::No);
    }

    #[test]
    fn update_reports_change() {
        let mut table = OptionTable::new();
        table.add("slot", json!(1), "", Autoload::No);

        assert!(table.update("slot", json!(2)));
        assert_eq!(table.get("slot"), Some(&json!(2)));
    }

    #[test]
    fn update_with_equal_value_is_no_change() {
        let mut table = OptionTable::new();
        table.add("slot", json!({"a": [1, 2]}), "", Autoload::No);

        assert!(!table.update("slot", json!({"a": [1, 2]})));
    }

    #[test]
    fn update_keeps_autoload() {
        let mut table = OptionTable::new();
        table.add("slot", json!(1), "", Autoload::No);
        table.update("slot", json!(2));

        assert_eq!(table.slot("slot").unwrap().autoload, Autoload::No);
    }

    #[test]
    fn update_creates_missing_slot() {
        let mut table = OptionTable::new();

        assert!(table.update("slot", json!("v")));
        assert_eq!(table.slot("slot").unwrap().autoload, Autoload::Yes);
    }

    #[test]
    fn delete_reports_presence() {
        let mut table = OptionTable::new();
        table.add("slot", json!(1), "", Autoload::No);

        assert!(table.delete("slot"));
        assert!(!table.delete("slot"));
        assert!(table.is_empty());
    }

    #[test]
    fn deserializes_without_version() {
        let table: OptionTable =
            serde_json::from_str(r#"{"options": {"k": {"value": true}}}"#).unwrap();

        assert_eq!(table.version, OptionTable::CURRENT_VERSION);
        assert_eq!(table.len(), 1);
        assert_eq!(table.slot("k").unwrap().autoload, Autoload::Yes);
    }
}
