//! Product catalog module.
//!
//! Contains menu items, categories, add-ons, combos, settings, and the
//! read-only `Catalog` accessor built from them.

mod catalog;
mod item;
mod settings;
mod source;

pub use catalog::{Catalog, CategoryFilter};
pub use item::{AddOn, Category, Combo, Item, Price, SizeKey, PLACEHOLDER_IMAGE};
pub use settings::{Settings, DEFAULT_FEATURED_COUNT};
pub use source::{
    CatalogSource, DirSource, ADDONS_DOCUMENT, CATEGORIES_DOCUMENT, COMBOS_DOCUMENT,
    ITEMS_DOCUMENT, SETTINGS_DOCUMENT,
};
