//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable key-value store backed by a
//! single JSON document. Writes go to a temporary file first and are renamed
//! into place, so a crash never leaves a half-written document behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: parses the whole document on every `get`
//! - **Write**: serializes and rewrites the whole document on every `set`
//! - **Best for**: a handful of keys with small values

use crate::domain::error::{Result, TableScoutError};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// On-disk document format.
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "favorites": "[{\"id\":\"1\",\"name\":\"A\"}]"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// The file is read on every access, so values written by another instance
/// pointed at the same path are visible on the next `get`. Access from one
/// instance is serialized by an internal lock; concurrent writers from separate
/// instances follow last-writer-wins.
pub struct JsonFileStore {
    file_path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens a JSON store at `file_path`, creating parent directories.
    ///
    /// The file itself is created on the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tablescout::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::new(PathBuf::from("/tmp/tablescout/store.json"))?;
    /// # Ok::<(), tablescout::TableScoutError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self {
            file_path,
            lock: Mutex::new(()),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_document(&self) -> Result<StorageData> {
        if !self.file_path.exists() {
            tracing::trace!("store file does not exist yet");
            return Ok(StorageData::default());
        }

        let contents = std::fs::read_to_string(&self.file_path)
            .map_err(|e| TableScoutError::StorageRead(format!("failed to read store: {e}")))?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| TableScoutError::StorageRead(format!("failed to parse JSON: {e}")))?;

        tracing::trace!(version = data.version, entries = data.entries.len(), "loaded store");
        Ok(data)
    }

    fn write_document(&self, data: &StorageData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| TableScoutError::StorageWrite(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)
            .map_err(|e| TableScoutError::StorageWrite(format!("failed to write store: {e}")))?;

        std::fs::rename(&tmp_path, &self.file_path)
            .map_err(|e| TableScoutError::StorageWrite(format!("failed to replace store: {e}")))?;

        Ok(())
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        // The lock protects no data of its own, so a poisoned guard is still usable.
        self.lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_get", key = %key).entered();
        let _guard = self.guard();

        let value = self.read_document()?.entries.remove(key);
        tracing::debug!(found = value.is_some(), "lookup complete");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, len = value.len()).entered();
        let _guard = self.guard();

        let mut data = self.read_document().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "existing store unreadable, starting a fresh document");
            StorageData::default()
        });
        data.entries.insert(key.to_string(), value.to_string());
        self.write_document(&data)?;

        tracing::debug!("value saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/store.json")).unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        JsonFileStore::new(path.clone())
            .unwrap()
            .set("favorites", "[]")
            .unwrap();

        let reopened = JsonFileStore::new(path).unwrap();
        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_overwrites_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("store.json")).unwrap();

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
        assert!(!dir.path().join("store.tmp").exists());
    }

    #[test]
    fn corrupt_document_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(path).unwrap();
        assert!(matches!(
            store.get("favorites"),
            Err(TableScoutError::StorageRead(_))
        ));

        store.set("favorites", "[]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[]"));
    }
}
