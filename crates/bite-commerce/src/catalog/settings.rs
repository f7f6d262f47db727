//! Storefront settings record.

use serde::{Deserialize, Serialize};

/// Featured items shown on the home view when settings don't say.
pub const DEFAULT_FEATURED_COUNT: usize = 6;

/// Brand and contact settings from `settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Phone number orders are sent to, used verbatim in the link.
    pub whatsapp: String,
    pub brand: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub banners: Vec<String>,
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

fn default_featured_count() -> usize {
    DEFAULT_FEATURED_COUNT
}

impl Settings {
    pub fn new(whatsapp: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            whatsapp: whatsapp.into(),
            brand: brand.into(),
            address: String::new(),
            hours: String::new(),
            logo: String::new(),
            banners: Vec::new(),
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }
}
