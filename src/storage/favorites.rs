//! Persisted favorites.
//!
//! [`FavoritesStore`] owns the read/modify/write contract for the favorites key:
//!
//! - [`load`](FavoritesStore::load) never fails. A missing key, an unreadable
//!   backend or a document that does not parse all yield the empty set, and the
//!   fault is logged.
//! - [`toggle`](FavoritesStore::toggle) computes the new set from the caller's
//!   current set, writes the whole collection once, and only then returns it. A
//!   failed write returns [`TableScoutError::StorageWrite`] and no set.

use crate::domain::error::{Result, TableScoutError};
use crate::domain::{Business, FavoriteSet};
use crate::storage::backend::KeyValueStore;

/// Storage key holding the JSON array of favorite businesses.
pub const FAVORITES_KEY: &str = "favorites";

/// Favorites persisted in a [`KeyValueStore`].
///
/// # Examples
///
/// ```
/// use tablescout::storage::{FavoritesStore, MemoryStore};
/// use tablescout::Business;
///
/// let store = FavoritesStore::new(MemoryStore::new());
/// let current = store.load();
/// let updated = store.toggle(&Business::new("1", "A"), &current)?;
/// assert_eq!(store.load(), updated);
/// # Ok::<(), tablescout::TableScoutError>(())
/// ```
#[derive(Debug)]
pub struct FavoritesStore<S> {
    backend: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Reads the persisted favorites.
    ///
    /// Returns the empty set when nothing was stored or the stored value cannot
    /// be read or parsed.
    pub fn load(&self) -> FavoriteSet {
        let _span = tracing::debug_span!("favorites_load").entered();

        match self.try_load() {
            Ok(favorites) => {
                tracing::debug!(count = favorites.len(), "favorites loaded");
                favorites
            }
            Err(e) => {
                tracing::warn!(error = %e, "error loading favorites, using empty set");
                FavoriteSet::new()
            }
        }
    }

    fn try_load(&self) -> Result<FavoriteSet> {
        let Some(raw) = self.backend.get(FAVORITES_KEY)? else {
            return Ok(FavoriteSet::new());
        };

        let businesses: Vec<Business> = serde_json::from_str(&raw)
            .map_err(|e| TableScoutError::StorageRead(format!("malformed favorites: {e}")))?;

        let stored = businesses.len();
        let favorites = FavoriteSet::from_businesses(businesses);
        if favorites.len() != stored {
            tracing::warn!(
                stored = stored,
                kept = favorites.len(),
                "dropped duplicate favorite ids"
            );
        }
        Ok(favorites)
    }

    /// Adds `item` if its id is absent from `current`, removes it otherwise,
    /// and persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`TableScoutError::StorageWrite`] if the collection could not be
    /// written. The caller must then keep displaying `current`.
    pub fn toggle(&self, item: &Business, current: &FavoriteSet) -> Result<FavoriteSet> {
        let _span = tracing::debug_span!("favorites_toggle", id = %item.id).entered();

        let updated = current.toggled(item);
        let json = serde_json::to_string(&updated)
            .map_err(|e| TableScoutError::StorageWrite(format!("failed to serialize favorites: {e}")))?;

        self.backend.set(FAVORITES_KEY, &json).map_err(|e| {
            tracing::error!(error = %e, "error saving favorite");
            match e {
                TableScoutError::StorageWrite(_) => e,
                other => TableScoutError::StorageWrite(other.to_string()),
            }
        })?;

        tracing::debug!(
            added = updated.contains(&item.id),
            count = updated.len(),
            "favorites saved"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that records writes and can be told to fail them.
    #[derive(Default)]
    struct RecordingStore {
        inner: MemoryStore,
        writes: AtomicUsize,
        fail_writes: bool,
        fail_reads: bool,
    }

    impl KeyValueStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(TableScoutError::StorageRead("disk unavailable".into()));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(TableScoutError::Io(std::io::Error::other("disk full")));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value)
        }
    }

    fn stored(store: &FavoritesStore<RecordingStore>) -> serde_json::Value {
        let raw = store.backend().inner.get(FAVORITES_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn load_on_empty_storage_returns_empty_set() {
        let store = FavoritesStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_returns_stored_favorites() {
        let backend = MemoryStore::new();
        backend
            .set(FAVORITES_KEY, r#"[{"id":"1","name":"Test Restaurant"}]"#)
            .unwrap();

        let favorites = FavoritesStore::new(backend).load();
        assert_eq!(favorites.as_slice(), &[Business::new("1", "Test Restaurant")]);
    }

    #[test]
    fn load_swallows_read_and_parse_faults() {
        let failing = FavoritesStore::new(RecordingStore {
            fail_reads: true,
            ..RecordingStore::default()
        });
        assert!(failing.load().is_empty());

        let backend = MemoryStore::new();
        backend.set(FAVORITES_KEY, "{oops").unwrap();
        assert!(FavoritesStore::new(backend).load().is_empty());
    }

    #[test]
    fn toggle_adds_then_removes_with_one_write_each() {
        let store = FavoritesStore::new(RecordingStore::default());
        let a = Business::new("1", "A");

        let added = store.toggle(&a, &FavoriteSet::new()).unwrap();
        assert_eq!(added.as_slice(), &[a.clone()]);
        assert_eq!(stored(&store), serde_json::json!([{ "id": "1", "name": "A" }]));

        let removed = store.toggle(&a, &added).unwrap();
        assert!(removed.is_empty());
        assert_eq!(stored(&store), serde_json::json!([]));

        assert_eq!(store.backend().writes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn toggle_keeps_other_favorites_in_order() {
        let store = FavoritesStore::new(RecordingStore::default());
        let existing = Business::new("2", "Existing Restaurant");
        let new = Business::new("1", "Test Restaurant");

        let current = FavoriteSet::from_businesses(vec![existing.clone()]);
        let updated = store.toggle(&new, &current).unwrap();
        assert_eq!(updated.as_slice(), &[existing.clone(), new.clone()]);

        let updated = store.toggle(&new, &updated).unwrap();
        assert_eq!(updated.as_slice(), &[existing]);
    }

    #[test]
    fn failed_write_is_reported_and_returns_no_set() {
        let store = FavoritesStore::new(RecordingStore {
            fail_writes: true,
            ..RecordingStore::default()
        });
        let current = FavoriteSet::new();

        let err = store.toggle(&Business::new("1", "A"), &current).unwrap_err();
        assert!(matches!(err, TableScoutError::StorageWrite(_)));
        assert_eq!(err.to_string(), "Failed to save favorite: IO error: disk full");
        assert!(store.load().is_empty());
    }
}
