//! Bite CLI - terminal storefront for the Bite cart and ordering engine.
//!
//! Commands:
//! - `bite home` - Brand details and featured items
//! - `bite menu` - Browse the menu by category
//! - `bite product` - Configure an item and add it to the cart
//! - `bite cart` - Review and edit the cart
//! - `bite favorites` - List and toggle favorites
//! - `bite order` - Compose the WhatsApp order link
//! - `bite config` - Show or create configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use bite_observability::{init_logging, LogLevel};
use clap::{Parser, Subcommand};

use commands::{CartArgs, ConfigArgs, FavoritesArgs, HomeArgs, MenuArgs, OrderArgs, ProductArgs};

/// Bite CLI - browse the menu, fill a cart and send the order
#[derive(Parser)]
#[command(name = "bite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Brand details and featured items
    Home(HomeArgs),

    /// Browse the menu
    Menu(MenuArgs),

    /// Show, configure and add a product
    Product(ProductArgs),

    /// Review and edit the cart
    Cart(CartArgs),

    /// List and toggle favorites
    Favorites(FavoritesArgs),

    /// Compose the order message and link
    Order(OrderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    if let Err(e) = init_logging(&logging) {
        ctx.output.debug(&e.to_string());
    }

    // Execute command
    let result = match cli.command {
        Commands::Home(args) => commands::home::run(args, &ctx),
        Commands::Menu(args) => commands::menu::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Favorites(args) => commands::favorites::run(args, &ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
