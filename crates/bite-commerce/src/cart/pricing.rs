//! Cart pricing calculations.
//!
//! A line costs `(unit price + add-ons + combo extra) * quantity`. The cart
//! total is the sum of its lines. Nothing here mutates or reads the catalog.

use crate::cart::LineItem;
use crate::error::CommerceError;
use crate::money::Money;
use serde::Serialize;

/// Total for one cart line.
pub fn line_total(item: &LineItem) -> Result<Money, CommerceError> {
    preview_total(
        item.unit_price,
        item.addons.iter().map(|a| a.price),
        item.combo.as_ref().map(|c| c.extra),
        item.quantity,
    )
}

/// Sum of [`line_total`] over every line. Zero for an empty cart.
pub fn cart_total(cart: &[LineItem]) -> Result<Money, CommerceError> {
    cart.iter().try_fold(Money::zero(), |acc, item| {
        acc.try_add(line_total(item)?).ok_or(CommerceError::Overflow)
    })
}

/// Price a configuration that is not in the cart yet.
///
/// Any quantity of at least one is priced. The per-line cap is enforced
/// where lines enter the cart, not here.
pub fn preview_total(
    unit_price: Money,
    addon_prices: impl IntoIterator<Item = Money>,
    combo_extra: Option<Money>,
    quantity: i64,
) -> Result<Money, CommerceError> {
    if quantity < 1 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    let addons = Money::try_sum(addon_prices).ok_or(CommerceError::Overflow)?;
    unit_price
        .try_add(addons)
        .and_then(|m| m.try_add(combo_extra.unwrap_or_default()))
        .and_then(|per_unit| per_unit.try_multiply(quantity))
        .ok_or(CommerceError::Overflow)
}

/// Running summary shown in the sticky cart bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Number of lines (not units) in the cart.
    pub count: usize,
    pub total: Money,
    /// The bar is hidden while the cart is empty.
    pub visible: bool,
}

impl CartSummary {
    pub fn of(cart: &[LineItem]) -> Result<Self, CommerceError> {
        Ok(Self {
            count: cart.len(),
            total: cart_total(cart)?,
            visible: !cart.is_empty(),
        })
    }
}

/// Per-line breakdown for a cart view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePricing {
    pub index: usize,
    pub unit_price: Money,
    pub addons_total: Money,
    pub combo_extra: Money,
    pub quantity: i64,
    pub total: Money,
}

impl LinePricing {
    pub fn of(index: usize, item: &LineItem) -> Result<Self, CommerceError> {
        Ok(Self {
            index,
            unit_price: item.unit_price,
            addons_total: Money::try_sum(item.addons.iter().map(|a| a.price))
                .ok_or(CommerceError::Overflow)?,
            combo_extra: item.combo.as_ref().map(|c| c.extra).unwrap_or_default(),
            quantity: item.quantity,
            total: line_total(item)?,
        })
    }
}
