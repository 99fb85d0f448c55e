//! Simmer options - cached, merge-on-write access to one named options record.
//!
//! All settings live in a single mapping stored under a fixed slot of a host
//! key/value store. This crate reads that mapping once, serves reads from a
//! cache, and writes the whole merged mapping back on every change.
//!
//! # Modules
//!
//! - [`options`] - The options record, its cache, and the [`OptionsStore`] accessor
//! - [`storage`] - Host storage trait with in-memory and JSON-file hosts
//! - [`config`] - Settings files and environment overrides
//! - [`error`] - Error types and result aliases
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output and confirmations
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use simmer_options::{MemoryStorage, OptionsStore};
//!
//! let store = OptionsStore::new(MemoryStorage::new());
//! store.set_option("units", json!("metric")).unwrap();
//! store.set_option("servings", json!(4)).unwrap();
//!
//! let options = store.get_options().unwrap();
//! assert_eq!(options.len(), 2);
//!
//! store.delete_option("units").unwrap();
//! assert_eq!(store.get_option("units").unwrap(), None);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod storage;
pub mod ui;

pub use error::{OptionsError, Result};
pub use options::{CachePolicy, Options, OptionsCache, OptionsStore, OPTIONS_SLUG};
pub use storage::{Autoload, FileStorage, MemoryStorage, OptionStorage};
