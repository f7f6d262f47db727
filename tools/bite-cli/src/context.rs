//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};
use bite_cache::{FileStore, KvStore, MemoryStore};
use bite_commerce::catalog::{Catalog, DirSource};
use bite_commerce::cart::CartStore;

use crate::config::{Backend, StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// The store every command works against, whichever backend is configured.
pub type Store = CartStore<Box<dyn KvStore>>;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            StorefrontConfig::load(path)?
        } else {
            Self::find_config(&cwd, &output).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    ///
    /// Runs before logging is installed, so unreadable files are reported
    /// through `output`.
    fn find_config(start: &Path, output: &Output) -> Option<StorefrontConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match StorefrontConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => output.warn(&format!("Skipping unreadable config: {:#}", e)),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the menu, with a spinner while the documents are read.
    pub fn catalog(&self) -> Result<Catalog> {
        let dir = self.resolve_path(&self.config.catalog.dir);
        let spinner = self.output.spinner("Loading menu...");
        let loaded = Catalog::load(&DirSource::new(&dir));
        spinner.finish_and_clear();

        loaded.map_err(|e| {
            if e.is_retryable() {
                anyhow!("{}. Check {} and try again.", e, dir.display())
            } else {
                anyhow!(e)
            }
        })
    }

    /// Open the cart and favorites store.
    pub fn store(&self) -> Result<Store> {
        let storage = &self.config.storage;
        let backend: Box<dyn KvStore> = match storage.backend {
            Backend::File => {
                let dir = self.resolve_path(&storage.dir);
                self.output
                    .debug(&format!("Using storage at {}", dir.display()));
                Box::new(FileStore::open(&dir).with_context(|| {
                    format!("Failed to open storage at {}", dir.display())
                })?)
            }
            Backend::Memory => Box::new(MemoryStore::new()),
        };
        Ok(CartStore::open_with_keys(backend, storage.keys()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
