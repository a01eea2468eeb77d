//! # Storefront
//!
//! Builds the catalog, prints each product's discount, then checks the
//! optional data store.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         storefront                                      │
//! │                                                                         │
//! │  1. Initialize tracing (stderr, RUST_LOG aware)                         │
//! │  2. Load AppConfig (defaults → file → env)                              │
//! │  3. Offer each product to the Catalog                                   │
//! │       └── rejected? report it, continue with the next one              │
//! │  4. Print the discount report (text or --json) to stdout               │
//! │  5. Ping the data store if one is configured                            │
//! │       └── unreachable? report it, exit normally                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod report;

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use storefront_core::{Catalog, Product};
use storefront_db::DataStore;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Product catalog with per-category discounts")]
#[command(version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Do not contact the data store even if one is configured
    #[arg(long)]
    skip_store_check: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    info!("Starting storefront");

    let config = AppConfig::load(cli.config)?;

    let catalog = build_catalog(config.products());
    info!(products = catalog.len(), "Catalog ready");

    println!("{}", report::render(&catalog, cli.json)?);

    if cli.skip_store_check {
        info!("Data store check skipped");
    } else if let Some(store_config) = config.store {
        let store = DataStore::new(store_config);
        match store.ping().await {
            Ok(()) => println!("Database connected successfully!"),
            Err(e) => println!("Database connection failed: {e}"),
        }
    } else {
        info!("No data store configured");
    }

    Ok(())
}

/// Offers each product to a fresh catalog, reporting the ones refused.
fn build_catalog(products: Vec<Product>) -> Catalog {
    let (catalog, rejected) = Catalog::with_products(products);
    for err in &rejected {
        warn!(product = %err.name, field = err.field(), "Product rejected");
        eprintln!("Error: {err}");
    }
    catalog
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{default_filter},storefront=debug,storefront_db=debug,sqlx=warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
