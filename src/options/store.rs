//! Cached, merge-on-write accessor for the options record.

use serde_json::Value;

use crate::error::{OptionsError, Result};
use crate::storage::{Autoload, OptionStorage};

use super::{merge_options, value_kind, CachePolicy, Options, OptionsCache, OPTIONS_SLUG};

/// Sole mediator between callers and the persisted options record.
///
/// Reads go through an [`OptionsCache`]; the first read loads the record
/// from the host storage. Writes always send the whole record.
///
/// Under [`CachePolicy::ReadOnce`] writes do not touch the cache, so reads
/// keep returning the record as first loaded until [`OptionsStore::refresh`]
/// is called or the cache is cleared.
#[derive(Debug)]
pub struct OptionsStore<S> {
    storage: S,
    cache: OptionsCache,
    policy: CachePolicy,
}

impl<S: OptionStorage> OptionsStore<S> {
    /// Create an accessor with its own empty cache.
    pub fn new(storage: S) -> Self {
        Self::with_cache(storage, OptionsCache::new())
    }

    /// Create an accessor sharing an existing cache handle.
    pub fn with_cache(storage: S, cache: OptionsCache) -> Self {
        Self {
            storage,
            cache,
            policy: CachePolicy::default(),
        }
    }

    /// Set the cache policy.
    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The identifier of the persisted record.
    pub fn slug(&self) -> &'static str {
        OPTIONS_SLUG
    }

    /// The cache handle used by this accessor.
    pub fn cache(&self) -> &OptionsCache {
        &self.cache
    }

    /// The active cache policy.
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// The underlying host storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the accessor, returning the host storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Get the full options record.
    ///
    /// Loads from storage on the first call for this cache; an absent record
    /// is an empty mapping.
    pub fn get_options(&self) -> Result<Options> {
        if let Some(options) = self.cache.get() {
            return Ok(options);
        }

        let options = self.load()?;
        self.cache.store(options.clone());
        Ok(options)
    }

    /// Drop the cached record and load it again from storage.
    pub fn refresh(&self) -> Result<Options> {
        self.cache.clear();
        self.get_options()
    }

    /// Create the record if it has no content yet.
    ///
    /// Returns `false` without writing when the current record is non-empty.
    pub fn add_options(&self, value: Options, autoload: bool) -> Result<bool> {
        if !self.get_options()?.is_empty() {
            tracing::debug!("Options record '{}' already exists; not adding", OPTIONS_SLUG);
            return Ok(false);
        }

        let added = self.storage.add(
            OPTIONS_SLUG,
            Value::Object(value.clone()),
            "",
            Autoload::from(autoload),
        )?;
        tracing::debug!("Added options record '{}': {}", OPTIONS_SLUG, added);

        if added {
            self.after_write(value);
        }
        Ok(added)
    }

    /// Merge `value` into the record and persist the result.
    ///
    /// Returns whether the host reports a change.
    pub fn set_options(&self, value: Options) -> Result<bool> {
        let merged = merge_options(&self.get_options()?, &value);
        self.write(merged)
    }

    /// Delete the whole record from storage.
    pub fn delete_options(&self) -> Result<bool> {
        let deleted = self.storage.delete(OPTIONS_SLUG)?;
        tracing::debug!("Deleted options record '{}': {}", OPTIONS_SLUG, deleted);

        self.after_write(Options::new());
        Ok(deleted)
    }

    /// Get a single value, or `None` if the key is absent.
    pub fn get_option(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.get_options()?.get(key).cloned())
    }

    /// Check if the record contains `key`.
    pub fn has_option(&self, key: &str) -> Result<bool> {
        Ok(self.get_options()?.contains_key(key))
    }

    /// Merge a single key into the record.
    pub fn set_option(&self, key: impl Into<String>, value: Value) -> Result<bool> {
        let mut single = Options::new();
        single.insert(key.into(), value);
        self.set_options(single)
    }

    /// Remove `key` from the record and persist the remainder.
    ///
    /// The record is written even when `key` was absent; the host then
    /// reports no change.
    pub fn delete_option(&self, key: &str) -> Result<bool> {
        let mut options = self.get_options()?;
        options.shift_remove(key);
        self.write(options)
    }

    fn load(&self) -> Result<Options> {
        tracing::debug!("Loading options record '{}' from storage", OPTIONS_SLUG);

        match self.storage.get(OPTIONS_SLUG)? {
            None => Ok(Options::new()),
            Some(Value::Object(options)) => Ok(options),
            Some(other) => Err(OptionsError::MalformedRecord {
                slug: OPTIONS_SLUG.to_string(),
                found: value_kind(&other).to_string(),
            }),
        }
    }

    fn write(&self, options: Options) -> Result<bool> {
        let changed = self
            .storage
            .update(OPTIONS_SLUG, Value::Object(options.clone()))?;
        tracing::debug!(
            "Updated options record '{}' ({} keys): {}",
            OPTIONS_SLUG,
            options.len(),
            changed
        );

        self.after_write(options);
        Ok(changed)
    }

    fn after_write(&self, options: Options) {
        if self.policy.refreshes_on_write() {
            self.cache.store(options);
        }
    }
}
