//! Product page configuration: size, add-ons, combo, quantity.
//!
//! A [`Selection`] is what the customer has ticked on the product page. The
//! catalog turns it into a live price preview and, on "add to cart", into a
//! [`LineItem`] whose prices are frozen from that moment on.

use crate::cart::{line_total, validate_quantity, AddOnSnapshot, ComboSnapshot, LineItem};
use crate::catalog::{Catalog, SizeKey};
use crate::error::CommerceError;
use crate::ids::{AddOnId, ProductId};
use crate::money::Money;

/// The customer's current choices for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub size: SizeKey,
    pub addons: Vec<AddOnId>,
    pub combo: bool,
    pub quantity: i64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            size: SizeKey::Single,
            addons: Vec::new(),
            combo: false,
            quantity: 1,
        }
    }
}

impl Selection {
    pub fn new(size: SizeKey) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_addon(mut self, id: impl Into<AddOnId>) -> Self {
        self.addons.push(id.into());
        self
    }

    pub fn with_combo(mut self, combo: bool) -> Self {
        self.combo = combo;
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }
}

impl Catalog {
    /// Build a cart line for `product` from `selection`.
    ///
    /// Fails with a not-found error when the product, an add-on, or the
    /// combo offer does not exist, and with `SizeUnavailable` when the item
    /// has no price for the chosen size.
    pub fn build_line_item(
        &self,
        product: &ProductId,
        selection: &Selection,
    ) -> Result<LineItem, CommerceError> {
        validate_quantity(selection.quantity)?;
        let item = self.find_item(product)?;
        let unit_price =
            item.price
                .for_size(selection.size)
                .ok_or_else(|| CommerceError::SizeUnavailable {
                    product: item.id.to_string(),
                    size: selection.size.as_str().to_string(),
                })?;

        let addons = selection
            .addons
            .iter()
            .map(|id| self.find_addon(id).map(AddOnSnapshot::from))
            .collect::<Result<Vec<_>, _>>()?;

        let combo = if selection.combo {
            Some(ComboSnapshot::from(self.default_combo()?))
        } else {
            None
        };

        Ok(LineItem {
            product_id: item.id.clone(),
            name: item.name.clone(),
            size: selection.size.label().to_string(),
            unit_price,
            quantity: selection.quantity,
            addons,
            combo,
        })
    }

    /// Live price for the product page, before anything is added to the cart.
    pub fn price_preview(
        &self,
        product: &ProductId,
        selection: &Selection,
    ) -> Result<Money, CommerceError> {
        line_total(&self.build_line_item(product, selection)?)
    }
}
