//! Read-only view over the loaded menu.

use crate::catalog::{AddOn, Category, Combo, Item, Settings};
use crate::error::CommerceError;
use crate::ids::{AddOnId, CategoryId, ProductId};

/// Which items a menu listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CategoryId),
}

impl CategoryFilter {
    /// Parse a filter value where `"all"` means every item.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(CategoryId::new(value))
        }
    }

    fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => &item.category == id,
        }
    }
}

/// The menu for one page view.
///
/// Built once from externally loaded data and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    categories: Vec<Category>,
    addons: Vec<AddOn>,
    combos: Vec<Combo>,
    settings: Settings,
}

impl Catalog {
    /// Create an empty catalog with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            items: Vec::new(),
            categories: Vec::new(),
            addons: Vec::new(),
            combos: Vec::new(),
            settings,
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_addons(mut self, addons: Vec<AddOn>) -> Self {
        self.addons = addons;
        self
    }

    pub fn with_combos(mut self, combos: Vec<Combo>) -> Self {
        self.combos = combos;
        self
    }

    /// Look up an item by id.
    pub fn find_item(&self, id: &ProductId) -> Result<&Item, CommerceError> {
        self.items
            .iter()
            .find(|i| &i.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Look up an add-on by id.
    pub fn find_addon(&self, id: &AddOnId) -> Result<&AddOn, CommerceError> {
        self.addons
            .iter()
            .find(|a| &a.id == id)
            .ok_or_else(|| CommerceError::AddOnNotFound(id.to_string()))
    }

    /// Look up a category by id.
    pub fn find_category(&self, id: &CategoryId) -> Result<&Category, CommerceError> {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| CommerceError::CategoryNotFound(id.to_string()))
    }

    /// Items matching `filter`, in catalog order.
    pub fn list_by_category(&self, filter: &CategoryFilter) -> Vec<&Item> {
        self.items.iter().filter(|i| filter.matches(i)).collect()
    }

    /// Featured items in catalog order, at most `limit` of them.
    pub fn list_featured(&self, limit: usize) -> Vec<&Item> {
        self.items.iter().filter(|i| i.featured).take(limit).collect()
    }

    /// Featured items for the home view, limited by `settings.featuredCount`.
    pub fn featured_for_home(&self) -> Vec<&Item> {
        self.list_featured(self.settings.featured_count)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn addons(&self) -> &[AddOn] {
        &self.addons
    }

    /// The combo offer. Only the first configured combo is ever sold.
    pub fn default_combo(&self) -> Result<&Combo, CommerceError> {
        self.combos.first().ok_or(CommerceError::ComboUnavailable)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
