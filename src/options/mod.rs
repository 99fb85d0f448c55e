//! The options record and its accessor.
//!
//! All plugin settings live in one mapping stored under [`OPTIONS_SLUG`].
//! [`OptionsStore`] reads that mapping through a read-through
//! [`OptionsCache`] and writes it back whole after merging.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use simmer_options::options::OptionsStore;
//! use simmer_options::storage::MemoryStorage;
//!
//! let store = OptionsStore::new(MemoryStorage::new());
//! store.set_option("servings", json!(4)).unwrap();
//!
//! assert_eq!(store.get_option("servings").unwrap(), Some(json!(4)));
//! assert_eq!(store.get_option("missing").unwrap(), None);
//! ```

pub mod cache;
pub mod store;

pub use cache::{CachePolicy, OptionsCache};
pub use store::OptionsStore;

use serde_json::{Map, Value};

/// Identifier of the persisted options record.
pub const OPTIONS_SLUG: &str = "simmer_private_options";

/// The options record: string keys to arbitrary values.
pub type Options = Map<String, Value>;

/// Shallow merge of two records.
///
/// Keys in `overlay` replace the same keys in `base` in place; new keys are
/// appended in the order they appear in `overlay`.
pub fn merge_options(base: &Options, overlay: &Options) -> Options {
    let mut result = base.clone();
    for (key, value) in overlay {
        result.insert(key.clone(), value.clone());
    }
    result
}

/// Describe the JSON kind of a value, for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Options {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn merge_adds_new_keys() {
        let merged = merge_options(&record(json!({"a": 1})), &record(json!({"b": 2})));
        assert_eq!(Value::Object(merged), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn merge_overlay_wins() {
        let merged = merge_options(
            &record(json!({"a": 1, "b": 1})),
            &record(json!({"b": 2})),
        );
        assert_eq!(merged["b"], json!(2));
        assert_eq!(merged["a"], json!(1));
    }

    #[test]
    fn merge_is_shallow() {
        let merged = merge_options(
            &record(json!({"nested": {"x": 1, "y": 2}})),
            &record(json!({"nested": {"x": 9}})),
        );
        assert_eq!(merged["nested"], json!({"x": 9}));
    }

    #[test]
    fn merge_keeps_existing_order_and_appends() {
        let merged = merge_options(
            &record(json!({"first": 1, "second": 2})),
            &record(json!({"third": 3, "first": 10})),
        );
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["first", "second", "third"]);
    }

    #[test]
    fn merge_with_empty_overlay_is_identity() {
        let base = record(json!({"a": 1}));
        assert_eq!(merge_options(&base, &Options::new()), base);
    }

    #[test]
    fn value_kind_names() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(false)), "boolean");
        assert_eq!(value_kind(&json!(1.5)), "number");
        assert_eq!(value_kind(&json!("s")), "string");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
    }
}
