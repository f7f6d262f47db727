//! Catalog document loading.

use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::catalog::{AddOn, Catalog, Category, Combo, Item, Settings};
use crate::error::CommerceError;

pub const ITEMS_DOCUMENT: &str = "items.json";
pub const CATEGORIES_DOCUMENT: &str = "categories.json";
pub const ADDONS_DOCUMENT: &str = "addons.json";
pub const COMBOS_DOCUMENT: &str = "combos.json";
pub const SETTINGS_DOCUMENT: &str = "settings.json";

/// Where catalog documents come from.
pub trait CatalogSource {
    /// Fetch the raw bytes of a named document.
    ///
    /// A missing document is reported as `io::ErrorKind::NotFound`.
    fn fetch(&self, document: &str) -> io::Result<Vec<u8>>;
}

/// Reads documents from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CatalogSource for DirSource {
    fn fetch(&self, document: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(document))
    }
}

impl Catalog {
    /// Load every catalog document from `source`.
    ///
    /// `categories.json` is optional; every other document is required.
    pub fn load(source: &impl CatalogSource) -> Result<Self, CommerceError> {
        let settings: Settings = load_document(source, SETTINGS_DOCUMENT)?;
        let items: Vec<Item> = load_document(source, ITEMS_DOCUMENT)?;
        let addons: Vec<AddOn> = load_document(source, ADDONS_DOCUMENT)?;
        let combos: Vec<Combo> = load_document(source, COMBOS_DOCUMENT)?;
        let categories: Vec<Category> =
            load_optional_document(source, CATEGORIES_DOCUMENT)?.unwrap_or_default();

        tracing::debug!(
            items = items.len(),
            categories = categories.len(),
            addons = addons.len(),
            combos = combos.len(),
            "catalog loaded"
        );

        Ok(Catalog::new(settings)
            .with_items(items)
            .with_categories(categories)
            .with_addons(addons)
            .with_combos(combos))
    }
}

fn load_document<T: DeserializeOwned>(
    source: &impl CatalogSource,
    document: &str,
) -> Result<T, CommerceError> {
    match load_optional_document(source, document)? {
        Some(value) => Ok(value),
        None => Err(load_failure(document, "document not found")),
    }
}

fn load_optional_document<T: DeserializeOwned>(
    source: &impl CatalogSource,
    document: &str,
) -> Result<Option<T>, CommerceError> {
    let bytes = match source.fetch(document) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(load_failure(document, e)),
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| load_failure(document, e))
}

fn load_failure(document: &str, reason: impl ToString) -> CommerceError {
    let reason = reason.to_string();
    tracing::error!(document, %reason, "catalog load failed");
    CommerceError::CatalogLoad {
        document: document.to_string(),
        reason,
    }
}
