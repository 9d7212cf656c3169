//! Shopfront CLI - Browse the catalog and check out from the terminal.
//!
//! Commands:
//! - `shopfront products` - List the catalog
//! - `shopfront product <id>` - Show one product and its variations
//! - `shopfront checkout` - Build a cart and submit an order
//! - `shopfront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::{CheckoutArgs, ConfigArgs, ProductArgs, ProductsArgs};

/// Shopfront - A storefront demo over a simulated network API
#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output (repeat for more log detail)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

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
    /// List every product in the catalog
    Products(ProductsArgs),

    /// Show details for one product
    Product(ProductArgs),

    /// Add items to a cart and place an order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose > 0, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let logging = ctx.config.logging;
    shopfront_observability::init(&logging.with_level(logging.level.lowered_by(cli.verbose)));

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
