//! Type-safe device-local key-value storage for the Bite storefront.
//!
//! Plays the role the browser's `localStorage` plays for the web storefront:
//! small JSON documents under fixed keys, rewritten whole on every change.
//!
//! # Example
//!
//! ```rust,ignore
//! use bite_cache::{Cache, FileStore};
//!
//! let cache = Cache::new(FileStore::open(".bite")?);
//!
//! // Store a value
//! cache.set("bb2-favorites", &favorites)?;
//!
//! // Retrieve a value
//! let favorites: Option<Vec<String>> = cache.get("bb2-favorites")?;
//! ```

mod error;
mod event;
mod kv;
mod store;

pub use error::CacheError;
pub use event::StorageEvent;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore, StorageEvent};
}
