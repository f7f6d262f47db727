//! Cart, pricing, favorites and order composition for the Bite storefront.
//!
//! This crate is the stateful core behind the storefront's views:
//!
//! - **Catalog**: read-only menu items, categories, add-ons, combo, settings
//! - **Cart**: frozen-price line items, pricing rules, the persisted store
//! - **Favorites**: toggle and list favorite items
//! - **Order**: the WhatsApp order message and its deep link
//!
//! # Example
//!
//! ```rust
//! use bite_cache::MemoryStore;
//! use bite_commerce::prelude::*;
//!
//! let catalog = Catalog::new(Settings::new("201000000000", "Burger Bar"))
//!     .with_items(vec![Item {
//!         id: ProductId::new("1"),
//!         name: "Cheeseburger".into(),
//!         description: String::new(),
//!         image: None,
//!         price: Price { single: Money::new(100), double: Some(Money::new(150)) },
//!         category: CategoryId::new("burgers"),
//!         featured: true,
//!     }]);
//!
//! let mut store = CartStore::open(MemoryStore::new());
//! let selection = Selection::new(SizeKey::Double).with_quantity(2);
//! let line = catalog.build_line_item(&ProductId::new("1"), &selection).unwrap();
//! store.add_to_cart(line).unwrap();
//!
//! assert_eq!(store.summary().unwrap().total, Money::new(300));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod configurator;
pub mod favorites;
pub mod order;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        AddOn, Catalog, CatalogSource, Category, CategoryFilter, Combo, DirSource, Item, Price,
        Settings, SizeKey,
    };

    // Cart
    pub use crate::cart::{
        cart_total, line_total, preview_total, AddOnSnapshot, CartStore, CartSummary,
        ComboSnapshot, LineItem, LinePricing, StoreKeys,
    };

    // Product page, favorites, order
    pub use crate::configurator::Selection;
    pub use crate::favorites::Favorites;
    pub use crate::order::{compose_message, dispatch_target, Customer, OrderDispatch};
}
