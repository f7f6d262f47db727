//! Menu item, category, add-on and combo types.

use crate::ids::{AddOnId, CategoryId, ComboId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Image shown when an item has none.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";

/// Which of an item's prices applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeKey {
    #[default]
    Single,
    Double,
}

impl SizeKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeKey::Single => "single",
            SizeKey::Double => "double",
        }
    }

    /// Label stored on cart lines and printed in orders.
    pub fn label(&self) -> &'static str {
        match self {
            SizeKey::Single => "سينجل",
            SizeKey::Double => "دابل",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Some(SizeKey::Single),
            "double" => Some(SizeKey::Double),
            _ => None,
        }
    }
}

/// Prices by size. Some items only come in one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub single: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double: Option<Money>,
}

impl Price {
    pub fn for_size(&self, size: SizeKey) -> Option<Money> {
        match size {
            SizeKey::Single => Some(self.single),
            SizeKey::Double => self.double,
        }
    }
}

/// A menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ProductId,
    pub name: String,
    #[serde(default, rename = "desc", alias = "description")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub price: Price,
    pub category: CategoryId,
    #[serde(default)]
    pub featured: bool,
}

impl Item {
    /// Image URL, or the placeholder when the item has none.
    pub fn image_or_placeholder(&self) -> &str {
        match self.image.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    /// Sizes this item can be ordered in.
    pub fn sizes(&self) -> Vec<SizeKey> {
        [SizeKey::Single, SizeKey::Double]
            .into_iter()
            .filter(|s| self.price.for_size(*s).is_some())
            .collect()
    }
}

/// A menu category used for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(alias = "name")]
    pub title: String,
}

/// An optional extra charged per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: AddOnId,
    pub name: String,
    pub price: Money,
}

/// A bundled upsell charged once per unit of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    pub id: ComboId,
    pub name: String,
    pub extra: Money,
}
