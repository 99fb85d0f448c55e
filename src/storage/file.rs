//! Host storage persisted as a single JSON document.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OptionsError, Result};

use super::{Autoload, OptionStorage, OptionTable};

/// Host storage backed by one JSON file.
///
/// Every call reads the file; mutating calls write it back only when the
/// table changed. A missing file is an empty table.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage at the given file path. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data_dir>/simmer/options.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("simmer")
            .join("options.json")
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table from disk.
    pub fn load(&self) -> Result<OptionTable> {
        if !self.path.exists() {
            return Ok(OptionTable::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(OptionTable::new());
        }

        serde_json::from_str(&content).map_err(|e| OptionsError::StoreParseError {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Save the table to disk using atomic write.
    pub fn save(&self, table: &OptionTable) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(table).map_err(|e| {
            OptionsError::InvalidValue {
                message: format!("Failed to serialize option store: {}", e),
            }
        })?;

        // Write to temp file, then rename over the target
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved {} option slot(s) to {:?}", table.len(), self.path);
        Ok(())
    }

    /// Load, apply `change`, and save if it reported a modification.
    fn modify(&self, change: impl FnOnce(&mut OptionTable) -> bool) -> Result<bool> {
        let mut table = self.load()?;
        let changed = change(&mut table);
        if changed {
            self.save(&table)?;
        }
        Ok(changed)
    }
}

impl OptionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let table = self.load()?;
        Ok(table.get(key).cloned())
    }

    fn add(
        &self,
        key: &str,
        value: Value,
        description: &str,
        autoload: Autoload,
    ) -> Result<bool> {
        self.modify(|table| table.add(key, value, description, autoload))
    }

    fn update(&self, key: &str, value: Value) -> Result<bool> {
        self.modify(|table| table.update(key, value))
    }

    fn delete(&self, key: &str) -> Result<bool> {
        self.modify(|table| table.delete(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup_storage() -> (TempDir, FileStorage) {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("nested").join("options.json"));
        (temp, storage)
    }

    #[test]
    fn missing_file_is_empty() {
        let (_temp, storage) = setup_storage();

        assert!(storage.load().unwrap().is_empty());
        assert!(storage.get("slot").unwrap().is_none());
        assert!(!storage.path().exists());
    }

    #[test]
    fn add_persists_across_instances() {
        let (_temp, storage) = setup_storage();
        storage
            .add("slot", json!({"a": 1}), "", Autoload::No)
            .unwrap();

        let reopened = FileStorage::new(storage.path());
        assert_eq!(reopened.get("slot").unwrap(), Some(json!({"a": 1})));
        assert_eq!(
            reopened.load().unwrap().slot("slot").unwrap().autoload,
            Autoload::No
        );
    }

    #[test]
    fn deleting_absent_slot_does_not_create_file() {
        let (_temp, storage) = setup_storage();

        assert!(!storage.delete("slot").unwrap());
        assert!(!storage.path().exists());
    }

    #[test]
    fn unchanged_update_does_not_rewrite_file() {
        let (_temp, storage) = setup_storage();
        assert!(storage.update("slot", json!({"a": 1})).unwrap());

        let before = fs::read_to_string(storage.path()).unwrap();
        let modified = fs::metadata(storage.path()).unwrap().modified().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));

        assert!(!storage.update("slot", json!({"a": 1})).unwrap());

        assert_eq!(fs::read_to_string(storage.path()).unwrap(), before);
        assert_eq!(
            fs::metadata(storage.path()).unwrap().modified().unwrap(),
            modified
        );
    }

    #[test]
    fn save_uses_atomic_write() {
        let (_temp, storage) = setup_storage();
        storage.update("slot", json!(true)).unwrap();

        let temp_path = storage.path().with_extension("json.tmp");
        assert!(
            !temp_path.exists(),
            "Temp file should not exist after successful save"
        );
        assert_eq!(storage.get("slot").unwrap(), Some(json!(true)));
    }

    #[test]
    fn corrupt_file_reports_parse_error() {
        let (_temp, storage) = setup_storage();
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), "{ not json").unwrap();

        let err = storage.get("slot").unwrap_err();
        assert!(matches!(err, OptionsError::StoreParseError { .. }));
    }

    #[test]
    fn empty_file_is_empty_table() {
        let (_temp, storage) = setup_storage();
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), "").unwrap();

        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn default_path_ends_with_file_name() {
        let path = FileStorage::default_path();
        assert!(path.ends_with("simmer/options.json"));
    }
}
