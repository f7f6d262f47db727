//! Persisted cart and favorites.

use bite_cache::{Cache, CacheError, KvStore, StorageEvent};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cart::{validate_quantity, CartSummary, LineItem};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Default storage key for the cart.
pub const DEFAULT_CART_KEY: &str = "bb2-cart";
/// Default storage key for favorites.
pub const DEFAULT_FAVORITES_KEY: &str = "bb2-favorites";

/// The two storage keys a store reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreKeys {
    #[serde(default = "default_cart_key")]
    pub cart: String,
    #[serde(default = "default_favorites_key")]
    pub favorites: String,
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

fn default_favorites_key() -> String {
    DEFAULT_FAVORITES_KEY.to_string()
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self {
            cart: default_cart_key(),
            favorites: default_favorites_key(),
        }
    }
}

/// Cart and favorites for one device.
///
/// Loaded once when opened, held in memory, and rewritten whole to storage
/// on every mutation before the mutating call returns. When the write fails
/// the in-memory state is rolled back, so callers never observe a change
/// that was not persisted.
///
/// Two stores over the same storage (two open views) do not lock each other
/// out; the last write wins. A view that learns of another writer through a
/// [`StorageEvent`] calls [`CartStore::handle_storage_event`] to re-read.
#[derive(Debug)]
pub struct CartStore<S> {
    cache: Cache<S>,
    keys: StoreKeys,
    cart: Vec<LineItem>,
    favorites: Vec<ProductId>,
}

impl<S: KvStore> CartStore<S> {
    /// Open a store with the default keys.
    pub fn open(store: S) -> Self {
        Self::open_with_keys(store, StoreKeys::default())
    }

    /// Open a store, loading whatever is persisted under `keys`.
    ///
    /// Missing or unreadable data loads as an empty collection. Stored lines
    /// whose quantity is outside `1..=99` are dropped.
    pub fn open_with_keys(store: S, keys: StoreKeys) -> Self {
        let cache = Cache::new(store);
        let cart = load_cart(&cache, &keys.cart);
        let favorites = dedup(load_or_empty(&cache, &keys.favorites));
        tracing::debug!(
            lines = cart.len(),
            favorites = favorites.len(),
            "cart store opened"
        );
        Self {
            cache,
            keys,
            cart,
            favorites,
        }
    }

    /// Lines in display order.
    pub fn cart(&self) -> &[LineItem] {
        &self.cart
    }

    /// Line at `index`.
    pub fn line(&self, index: usize) -> Result<&LineItem, CommerceError> {
        let len = self.cart.len();
        self.cart
            .get(index)
            .ok_or(CommerceError::LineNotFound { index, len })
    }

    /// Favorite product ids in the order they were added.
    pub fn favorites(&self) -> &[ProductId] {
        &self.favorites
    }

    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }

    /// Count and total for the sticky cart bar.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        CartSummary::of(&self.cart)
    }

    /// Append a line to the end of the cart.
    pub fn add_to_cart(&mut self, item: LineItem) -> Result<(), CommerceError> {
        validate_quantity(item.quantity)?;
        let product = item.product_id.clone();
        self.mutate_cart(|cart| {
            cart.push(item);
            Ok(())
        })?;
        tracing::debug!(%product, lines = self.cart.len(), "added to cart");
        Ok(())
    }

    /// Remove the line at `index`. Later lines shift down by one.
    pub fn remove_from_cart(&mut self, index: usize) -> Result<LineItem, CommerceError> {
        let removed = self.mutate_cart(|cart| {
            let len = cart.len();
            if index >= len {
                return Err(CommerceError::LineNotFound { index, len });
            }
            Ok(cart.remove(index))
        })?;
        tracing::debug!(index, product = %removed.product_id, "removed from cart");
        Ok(removed)
    }

    /// Set the quantity of the line at `index`.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> Result<(), CommerceError> {
        validate_quantity(quantity)?;
        self.mutate_cart(|cart| {
            let len = cart.len();
            let line = cart
                .get_mut(index)
                .ok_or(CommerceError::LineNotFound { index, len })?;
            line.quantity = quantity;
            Ok(())
        })?;
        tracing::debug!(index, quantity, "updated quantity");
        Ok(())
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> Result<(), CommerceError> {
        self.mutate_cart(|cart| {
            cart.clear();
            Ok(())
        })?;
        tracing::debug!("cleared cart");
        Ok(())
    }

    /// Flip favorite status for `id`. Returns the new status.
    pub fn toggle_favorite(&mut self, id: &ProductId) -> Result<bool, CommerceError> {
        let previous = self.favorites.clone();
        let now_favorite = match self.favorites.iter().position(|f| f == id) {
            Some(pos) => {
                self.favorites.remove(pos);
                false
            }
            None => {
                self.favorites.push(id.clone());
                true
            }
        };

        if let Err(e) = self.cache.set(&self.keys.favorites, &self.favorites) {
            self.favorites = previous;
            return Err(e.into());
        }
        tracing::debug!(product = %id, favorite = now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    /// Re-read both collections from storage, discarding in-memory state.
    pub fn reload(&mut self) {
        self.cart = load_cart(&self.cache, &self.keys.cart);
        self.favorites = dedup(load_or_empty(&self.cache, &self.keys.favorites));
    }

    /// React to a change notification. Returns whether anything was re-read.
    pub fn handle_storage_event(&mut self, event: &StorageEvent) -> bool {
        if event.key == self.keys.cart {
            self.cart = load_cart(&self.cache, &self.keys.cart);
            true
        } else if event.key == self.keys.favorites {
            self.favorites = dedup(load_or_empty(&self.cache, &self.keys.favorites));
            true
        } else {
            false
        }
    }

    /// Borrow the storage backend.
    pub fn backend(&self) -> &S {
        self.cache.store()
    }

    /// Apply `f` to a copy of the cart, persist it, and only then commit it.
    fn mutate_cart<T>(
        &mut self,
        f: impl FnOnce(&mut Vec<LineItem>) -> Result<T, CommerceError>,
    ) -> Result<T, CommerceError> {
        let mut next = self.cart.clone();
        let out = f(&mut next)?;
        self.cache.set(&self.keys.cart, &next)?;
        self.cart = next;
        Ok(out)
    }
}

/// Load a collection, treating absent or malformed data as empty.
fn load_or_empty<S: KvStore, T: DeserializeOwned>(cache: &Cache<S>, key: &str) -> Vec<T> {
    match cache.get::<Vec<T>>(key) {
        Ok(Some(values)) => values,
        Ok(None) => Vec::new(),
        Err(CacheError::Malformed { source, .. }) => {
            tracing::warn!(key, error = %source, "discarding malformed stored data");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read stored data");
            Vec::new()
        }
    }
}

/// Load the cart, dropping lines a mutation could never have produced.
fn load_cart<S: KvStore>(cache: &Cache<S>, key: &str) -> Vec<LineItem> {
    let mut cart: Vec<LineItem> = load_or_empty(cache, key);
    let mut index = 0;
    cart.retain(|line| {
        let keep = match validate_quantity(line.quantity) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    key,
                    index,
                    quantity = line.quantity,
                    error = %e,
                    "dropping stored line with invalid quantity"
                );
                false
            }
        };
        index += 1;
        keep
    });
    cart
}

fn dedup(ids: Vec<ProductId>) -> Vec<ProductId> {
    let mut out: Vec<ProductId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
