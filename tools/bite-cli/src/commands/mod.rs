//! CLI command implementations, one per storefront view.

pub mod cart;
pub mod config;
pub mod favorites;
pub mod home;
pub mod menu;
pub mod order;
pub mod product;

use anyhow::{bail, Result};
use bite_commerce::catalog::SizeKey;
use clap::{Args, Subcommand};
use dialoguer::Confirm;

/// Arguments for the home view.
#[derive(Args)]
pub struct HomeArgs {}

/// Arguments for the menu view.
#[derive(Args)]
pub struct MenuArgs {
    /// Category id to show, or "all".
    #[arg(long, default_value = "all")]
    pub category: String,
}

/// Arguments for the product view.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: String,

    /// Size: single or double.
    #[arg(short, long, default_value = "single", value_parser = parse_size)]
    pub size: SizeKey,

    /// Add-on id (repeatable).
    #[arg(short, long = "addon")]
    pub addons: Vec<String>,

    /// Make it a combo.
    #[arg(long)]
    pub combo: bool,

    /// Quantity.
    #[arg(short, long, default_value = "1")]
    pub qty: i64,

    /// Add the configured product to the cart.
    #[arg(long)]
    pub add: bool,
}

/// Arguments for the cart view.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// List cart lines and the grand total.
    List,
    /// Remove a line.
    Remove {
        /// Line position as listed (starting at 1).
        line: usize,
    },
    /// Change a line's quantity.
    Qty {
        /// Line position as listed (starting at 1).
        line: usize,
        /// New quantity.
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the favorites view.
#[derive(Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: Option<FavoritesCommand>,
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// List favorite items.
    List,
    /// Add or remove a favorite.
    Toggle {
        /// Product id.
        id: String,
    },
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Customer name.
    #[arg(long)]
    pub name: String,

    /// Mobile number.
    #[arg(long)]
    pub mobile: String,

    /// Delivery address.
    #[arg(long)]
    pub address: String,

    /// Notes for the kitchen.
    #[arg(long)]
    pub notes: Option<String>,

    /// Payment method.
    #[arg(long)]
    pub payment: String,

    /// Clear the cart without asking once the link is ready.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default bite.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_size(value: &str) -> Result<SizeKey, String> {
    SizeKey::from_str(value).ok_or_else(|| format!("unknown size '{}' (single, double)", value))
}

/// Convert a 1-based line position from the command line into an index.
pub(crate) fn line_index(line: usize) -> Result<usize> {
    if line == 0 {
        bail!("Line positions start at 1");
    }
    Ok(line - 1)
}

/// Ask a yes/no question, defaulting to no.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("double"), Ok(SizeKey::Double));
        assert!(parse_size("triple").is_err());
    }

    #[test]
    fn test_line_index() {
        assert_eq!(line_index(1).unwrap(), 0);
        assert!(line_index(0).is_err());
    }
}
