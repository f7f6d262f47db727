//! Favorites view over the store and the catalog.

use bite_cache::KvStore;

use crate::cart::CartStore;
use crate::catalog::{Catalog, Item};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Favorite toggling and listing for one view.
///
/// Holds no state of its own: membership lives in the [`CartStore`], item
/// data in the [`Catalog`].
pub struct Favorites<'s, 'c, S> {
    store: &'s mut CartStore<S>,
    catalog: &'c Catalog,
}

impl<'s, 'c, S: KvStore> Favorites<'s, 'c, S> {
    pub fn new(store: &'s mut CartStore<S>, catalog: &'c Catalog) -> Self {
        Self { store, catalog }
    }

    /// Flip favorite status. Returns the new status.
    pub fn toggle(&mut self, id: &ProductId) -> Result<bool, CommerceError> {
        self.store.toggle_favorite(id)
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.store.is_favorite(id)
    }

    /// Favorite items in catalog order. Ids no longer on the menu are skipped.
    ///
    /// The result borrows only the catalog, so it outlives this view.
    pub fn list_favorites(&self) -> Vec<&'c Item> {
        let catalog: &'c Catalog = self.catalog;
        catalog
            .items()
            .iter()
            .filter(|item| self.store.is_favorite(&item.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Price, Settings};
    use crate::ids::CategoryId;
    use crate::money::Money;
    use bite_cache::MemoryStore;

    fn catalog() -> Catalog {
        let item = |id: &str| Item {
            id: ProductId::new(id),
            name: format!("item {id}"),
            description: String::new(),
            image: None,
            price: Price {
                single: Money::new(50),
                double: None,
            },
            category: CategoryId::new("burgers"),
            featured: false,
        };
        Catalog::new(Settings::new("201000000000", "Burger Bar"))
            .with_items(vec![item("1"), item("2"), item("3")])
    }

    #[test]
    fn test_list_follows_catalog_order() {
        let catalog = catalog();
        let mut store = CartStore::open(MemoryStore::new());
        let mut favorites = Favorites::new(&mut store, &catalog);

        favorites.toggle(&"3".into()).unwrap();
        favorites.toggle(&"1".into()).unwrap();

        let ids: Vec<_> = favorites
            .list_favorites()
            .into_iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let catalog = catalog();
        let mut store = CartStore::open(MemoryStore::new());
        store.toggle_favorite(&"gone".into()).unwrap();

        let favorites = Favorites::new(&mut store, &catalog);
        assert!(favorites.is_favorite(&"gone".into()));
        assert!(favorites.list_favorites().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let catalog = catalog();
        let mut store = CartStore::open(MemoryStore::new());
        let mut favorites = Favorites::new(&mut store, &catalog);

        let id = ProductId::new("2");
        assert!(favorites.toggle(&id).unwrap());
        assert!(!favorites.toggle(&id).unwrap());
        assert!(!favorites.is_favorite(&id));
        assert!(favorites.list_favorites().is_empty());
    }
}
