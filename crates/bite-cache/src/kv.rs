//! Key-Value store wrapper with automatic serialization.

use crate::{CacheError, KvStore};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over any [`KvStore`] backend.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a backend.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bite_cache::{Cache, MemoryStore};
    ///
    /// let cache = Cache::new(MemoryStore::new());
    /// cache.set("bb2-favorites", &vec!["p1"]).unwrap();
    /// let favs: Option<Vec<String>> = cache.get("bb2-favorites").unwrap();
    /// assert_eq!(favs, Some(vec!["p1".to_string()]));
    /// ```
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and [`CacheError::Malformed`]
    /// if the stored bytes don't decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| CacheError::Malformed {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing the whole previous value.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        qty: i64,
    }

    #[test]
    fn test_typed_roundtrip() {
        let cache = Cache::new(MemoryStore::new());
        let entries = vec![
            Entry {
                id: "1".into(),
                qty: 2,
            },
            Entry {
                id: "7".into(),
                qty: 1,
            },
        ];

        cache.set("bb2-cart", &entries).unwrap();
        let loaded: Vec<Entry> = cache.get("bb2-cart").unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let loaded: Option<Vec<Entry>> = cache.get("bb2-cart").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_value() {
        let store = MemoryStore::new();
        store.set("bb2-cart", b"{not json").unwrap();

        let cache = Cache::new(store);
        let err = cache.get::<Vec<Entry>>("bb2-cart").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("bb2-cart", &serde_json::json!({"id": 1})).unwrap();

        let err = cache.get::<Vec<Entry>>("bb2-cart").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_cache_over_borrowed_store() {
        let store = MemoryStore::new();
        let cache = Cache::new(&store);
        cache.set("k", &1_i64).unwrap();
        assert!(store.exists("k").unwrap());
        assert_eq!(cache.keys().unwrap(), vec!["k".to_string()]);
    }
}
