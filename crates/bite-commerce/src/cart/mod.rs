//! Shopping cart module.
//!
//! Contains line items, pricing rules, and the persisted cart/favorites store.

mod line_item;
mod pricing;
mod store;

pub use line_item::{
    validate_quantity, AddOnSnapshot, ComboSnapshot, LineItem, MAX_QUANTITY_PER_ITEM,
};
pub use pricing::{cart_total, line_total, preview_total, CartSummary, LinePricing};
pub use store::{CartStore, StoreKeys, DEFAULT_CART_KEY, DEFAULT_FAVORITES_KEY};
