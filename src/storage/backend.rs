//! Storage backend abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the persistent storage the
//! client writes to. It is a plain string-keyed store of string values: the
//! favorites store keeps one key holding a JSON array, and nothing else in the
//! crate needs more than that.

use crate::domain::error::Result;
use std::sync::Arc;

/// Abstraction over persistent key-value storage.
///
/// Reading a key that was never written yields `Ok(None)`, not an error.
/// Every `set` replaces the whole value for the key.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one JSON document on disk
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local map
///
/// # Examples
///
/// ```
/// use tablescout::storage::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// assert_eq!(store.get("favorites")?, None);
/// store.set("favorites", "[]")?;
/// assert_eq!(store.get("favorites")?.as_deref(), Some("[]"));
/// # Ok::<(), tablescout::TableScoutError>(())
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be persisted. The previous value
    /// is then still in place.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
