//! Raw key-value backends.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use crate::event::{StorageEvent, Subscribers};
use crate::CacheError;

/// A device-local byte store addressed by string keys.
///
/// Methods take `&self`; backends use interior mutability the way the
/// browser's `localStorage` does. A successful `set` is durable before it
/// returns.
pub trait KvStore {
    /// Read the raw bytes under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// List stored keys in ascending order.
    fn keys(&self) -> Result<Vec<String>, CacheError>;

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: BTreeMap<String, Vec<u8>>,
    subscribers: Subscribers,
}

/// In-process store shared between clones.
///
/// Every clone sees the same entries, so two clones model two views of the
/// same device. Writes through any clone notify all subscribers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive a [`StorageEvent`] for every subsequent write or delete.
    pub fn subscribe(&self) -> Result<Receiver<StorageEvent>, CacheError> {
        let mut inner = self.inner.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(inner.subscribers.subscribe())
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let inner = self.inner.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut inner = self.inner.lock().map_err(|_| CacheError::Poisoned)?;
        inner.entries.insert(key.to_string(), value.to_vec());
        inner.subscribers.notify(key);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut inner = self.inner.lock().map_err(|_| CacheError::Poisoned)?;
        if inner.entries.remove(key).is_some() {
            inner.subscribers.notify(key);
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let inner = self.inner.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(inner.entries.keys().cloned().collect())
    }
}

/// Store that keeps one JSON file per key inside a directory.
///
/// Writes go to a temporary sibling, are synced, then renamed over the
/// target, so a crash leaves either the old or the new value.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

const FILE_EXTENSION: &str = "json";

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| CacheError::OpenError {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CacheError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), CacheError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(CacheError::InvalidKey(key.to_string()))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key)?;
        let io_err = |source| CacheError::Io {
            key: key.to_string(),
            source,
        };

        // Stage into a temp file unique to this write, then rename over the entry.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.root).map_err(io_err)?;
        tmp.write_all(value).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&path).map_err(|e| io_err(e.error))?;
        tracing::trace!(key, bytes = value.len(), "wrote store entry");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CacheError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = fs::read_dir(&self.root).map_err(|source| CacheError::Io {
            key: String::new(),
            source,
        })?;

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| CacheError::Io {
                    key: String::new(),
                    source,
                })?
                .path();
            if path.extension().is_some_and(|e| e == FILE_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if !stem.starts_with('.') {
                        keys.push(stem.to_string());
                    }
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", b"[1,2]").unwrap();
        assert_eq!(store.get("a").unwrap(), Some(b"[1,2]".to_vec()));
        assert!(store.exists("a").unwrap());

        store.delete("a").unwrap();
        assert!(!store.exists("a").unwrap());
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let tab_one = MemoryStore::new();
        let tab_two = tab_one.clone();

        tab_one.set("bb2-cart", b"[]").unwrap();
        assert_eq!(tab_two.get("bb2-cart").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_memory_store_notifies_subscribers() {
        let store = MemoryStore::new();
        let events = store.subscribe().unwrap();

        store.clone().set("bb2-favorites", b"[]").unwrap();
        store.delete("missing").unwrap();
        store.delete("bb2-favorites").unwrap();

        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(
            received,
            vec![
                StorageEvent::new("bb2-favorites"),
                StorageEvent::new("bb2-favorites"),
            ]
        );
    }

    #[test]
    fn test_boxed_backend_forwards() {
        let shared = MemoryStore::new();
        let boxed: Box<dyn KvStore> = Box::new(shared.clone());

        boxed.set("bb2-cart", b"[]").unwrap();
        assert!(boxed.exists("bb2-cart").unwrap());
        assert_eq!(shared.keys().unwrap(), vec!["bb2-cart".to_string()]);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set("bb2-cart", br#"[{"id":"1"}]"#).unwrap();
        }
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("bb2-cart").unwrap(),
            Some(br#"[{"id":"1"}]"#.to_vec())
        );
        assert_eq!(reopened.keys().unwrap(), vec!["bb2-cart".to_string()]);
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("nothing").unwrap(), None);
        store.delete("nothing").unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        for key in ["../escape", "a/b", "", ".hidden"] {
            assert!(matches!(
                store.set(key, b"x"),
                Err(CacheError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn test_file_store_concurrent_writers_leave_one_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let writers: Vec<_> = (0..8)
            .map(|n| {
                let store = FileStore::open(dir.path()).unwrap();
                std::thread::spawn(move || {
                    let body = serde_json::to_vec(&vec![n; 2000]).unwrap();
                    for _ in 0..20 {
                        store.set("bb2-cart", &body).unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let stored = FileStore::open(dir.path()).unwrap().get("bb2-cart").unwrap().unwrap();
        let values: Vec<u32> = serde_json::from_slice(&stored).unwrap();
        assert_eq!(values.len(), 2000);
        assert!(values.iter().all(|v| *v == values[0]));

        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
        assert_eq!(
            FileStore::open(dir.path()).unwrap().keys().unwrap(),
            vec!["bb2-cart".to_string()]
        );
    }
}
