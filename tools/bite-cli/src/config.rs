//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bite_commerce::cart::{StoreKeys, DEFAULT_CART_KEY, DEFAULT_FAVORITES_KEY};
use bite_commerce::order::DEFAULT_MESSAGING_DOMAIN;
use bite_observability::LogConfig;
use serde::{Deserialize, Serialize};

/// Names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["bite.toml", ".bite.toml", "bite.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Where the cart and favorites live.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Where the menu documents live.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Order dispatch.
    #[serde(default)]
    pub messaging: MessagingConfig,

    #[serde(default)]
    pub logging: LogConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Storage backend kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per key under `dir`.
    #[default]
    File,
    /// Nothing survives the process.
    Memory,
}

/// The `[storage]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_cart_key")]
    pub cart_key: String,

    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".bite")
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

fn default_favorites_key() -> String {
    DEFAULT_FAVORITES_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            dir: default_storage_dir(),
            cart_key: default_cart_key(),
            favorites_key: default_favorites_key(),
        }
    }
}

impl StorageConfig {
    pub fn keys(&self) -> StoreKeys {
        StoreKeys {
            cart: self.cart_key.clone(),
            favorites: self.favorites_key.clone(),
        }
    }
}

/// The `[catalog]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding `items.json`, `settings.json` and friends.
    #[serde(default = "default_catalog_dir")]
    pub dir: PathBuf,
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_catalog_dir(),
        }
    }
}

/// The `[messaging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagingConfig {
    #[serde(default = "default_domain")]
    pub domain: String,
}

fn default_domain() -> String {
    DEFAULT_MESSAGING_DOMAIN.to_string()
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
        }
    }
}
