//! Cart line item types.

use crate::catalog::{AddOn, Combo};
use crate::error::CommerceError;
use crate::ids::{AddOnId, ComboId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// Reject quantities outside `1..=MAX_QUANTITY_PER_ITEM`.
pub fn validate_quantity(quantity: i64) -> Result<(), CommerceError> {
    if quantity < 1 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CommerceError::QuantityExceedsLimit(
            quantity,
            MAX_QUANTITY_PER_ITEM,
        ));
    }
    Ok(())
}

/// One configured product in the cart.
///
/// Everything that affects the price is copied from the catalog when the line
/// is created. Later catalog changes never reprice lines already in a cart.
///
/// The field names on the wire are the ones the storefront has always
/// persisted (`id`, `qty`, `unitPrice`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product this line was configured from.
    #[serde(rename = "id", alias = "productId")]
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Size label (e.g. "دابل").
    pub size: String,
    /// Price of one unit of the chosen size at add time.
    pub unit_price: Money,
    #[serde(rename = "qty", alias = "quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub addons: Vec<AddOnSnapshot>,
    #[serde(default)]
    pub combo: Option<ComboSnapshot>,
}

impl LineItem {
    /// Create a plain line with no add-ons and no combo.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        size: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            size: size.into(),
            unit_price,
            quantity,
            addons: Vec::new(),
            combo: None,
        }
    }

    pub fn with_addon(mut self, addon: AddOnSnapshot) -> Self {
        self.addons.push(addon);
        self
    }

    pub fn with_combo(mut self, combo: ComboSnapshot) -> Self {
        self.combo = Some(combo);
        self
    }

    /// Add-on names for display.
    pub fn addon_names(&self) -> Vec<&str> {
        self.addons.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn has_combo(&self) -> bool {
        self.combo.is_some()
    }
}

/// An add-on as it was priced when the line was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnSnapshot {
    pub id: AddOnId,
    pub name: String,
    pub price: Money,
}

impl From<&AddOn> for AddOnSnapshot {
    fn from(addon: &AddOn) -> Self {
        Self {
            id: addon.id.clone(),
            name: addon.name.clone(),
            price: addon.price,
        }
    }
}

/// A combo as it was priced when the line was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboSnapshot {
    pub id: ComboId,
    pub name: String,
    pub extra: Money,
}

impl From<&Combo> for ComboSnapshot {
    fn from(combo: &Combo) -> Self {
        Self {
            id: combo.id.clone(),
            name: combo.name.clone(),
            extra: combo.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_QUANTITY_PER_ITEM).is_ok());
        assert!(matches!(
            validate_quantity(0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(matches!(
            validate_quantity(-3),
            Err(CommerceError::InvalidQuantity(-3))
        ));
        assert!(matches!(
            validate_quantity(MAX_QUANTITY_PER_ITEM + 1),
            Err(CommerceError::QuantityExceedsLimit(_, MAX_QUANTITY_PER_ITEM))
        ));
    }

    #[test]
    fn test_reads_storefront_cart_entry() {
        let json = r#"{
            "id": "5",
            "name": "تشيز برجر",
            "size": "دابل",
            "unitPrice": 140,
            "qty": 2,
            "addons": [{"id": "cheese", "name": "جبنة", "price": 10}],
            "combo": {"id": "c1", "name": "كومبو", "extra": 35}
        }"#;
        let line: LineItem = serde_json::from_str(json).unwrap();

        assert_eq!(line.product_id.as_str(), "5");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.addon_names(), vec!["جبنة"]);
        assert!(line.has_combo());
    }

    #[test]
    fn test_reads_entry_without_extras() {
        let json = r#"{"productId":"7","name":"x","size":"سينجل","unitPrice":50,"quantity":1,"combo":null}"#;
        let line: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(line.product_id.as_str(), "7");
        assert!(line.addons.is_empty());
        assert!(!line.has_combo());
    }

    #[test]
    fn test_writes_storefront_field_names() {
        let line = LineItem::new(ProductId::new("1"), "برجر", "سينجل", Money::new(80), 1);
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(value["id"], "1");
        assert_eq!(value["unitPrice"], 80);
        assert_eq!(value["qty"], 1);
        assert!(value["combo"].is_null());
    }
}
