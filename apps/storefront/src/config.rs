//! # Application Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_DATABASE_URL=mysql://shop@localhost:3306/ecommerce      │
//! │     STOREFRONT_CONNECT_TIMEOUT_SECS=2                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else ~/.config/storefront/storefront.toml (Linux) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     no data store, built-in demo products                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! database_url = "sqlite://catalog.db"
//! connect_timeout = 5
//!
//! [[products]]
//! name = "Laptop"
//! price_cents = 5000000
//! quantity = 2
//! category = "electronics"
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use storefront_core::{Category, Money, Product};
use storefront_db::StoreConfig;

pub const ENV_DATABASE_URL: &str = "STOREFRONT_DATABASE_URL";
pub const ENV_CONNECT_TIMEOUT: &str = "STOREFRONT_CONNECT_TIMEOUT_SECS";

// =============================================================================
// Product Entries
// =============================================================================

/// A product as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub price_cents: i64,
    pub quantity: i64,
    pub category: Category,
}

impl ProductEntry {
    pub fn new(name: &str, price: Money, quantity: i64, category: Category) -> Self {
        ProductEntry {
            name: name.to_string(),
            price_cents: price.cents(),
            quantity,
            category,
        }
    }

    pub fn to_product(&self) -> Product {
        Product::new(
            self.name.clone(),
            Money::from_cents(self.price_cents),
            self.quantity,
            self.category,
        )
    }
}

/// The products loaded when the config file lists none.
pub fn demo_products() -> Vec<ProductEntry> {
    vec![
        ProductEntry::new("Laptop", Money::from_major(50000), 2, Category::Electronics),
        ProductEntry::new("T-Shirt", Money::from_major(500), 6, Category::Clothing),
        ProductEntry::new("Headphones", Money::from_major(2000), 1, Category::Electronics),
    ]
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Optional data store to health-check. `None` skips the check.
    pub store: Option<StoreConfig>,

    /// Products to offer to the catalog, in order.
    pub products: Vec<ProductEntry>,
}

impl AppConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Loads configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// file at the default location is not.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies environment overrides. `lookup` is `std::env::var` outside tests.
    ///
    /// A timeout override needs a store to apply to, from the file or from
    /// `STOREFRONT_DATABASE_URL`; on its own it is a configuration error.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            debug!("Database URL overridden from environment");
            self.store = match self.store.take() {
                Some(mut store) => {
                    store.database_url = url;
                    Some(store)
                }
                None => Some(StoreConfig::new(url)),
            };
        }

        if let Some(raw) = lookup(ENV_CONNECT_TIMEOUT) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_CONNECT_TIMEOUT.to_string()))?;
            let store = self.store.as_mut().ok_or_else(|| {
                ConfigError::MissingRequired(format!(
                    "{ENV_DATABASE_URL} or store.database_url (needed by {ENV_CONNECT_TIMEOUT})"
                ))
            })?;
            debug!(secs, "Connect timeout overridden from environment");
            store.connect_timeout = Duration::from_secs(secs);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(store) = &self.store {
            if store.database_url.trim().is_empty() {
                return Err(ConfigError::MissingRequired("store.database_url".to_string()));
            }
            if store.connect_timeout.is_zero() {
                return Err(ConfigError::InvalidValue("store.connect_timeout".to_string()));
            }
        }

        Ok(())
    }

    /// Configured products, or the demo set when none are listed.
    pub fn products(&self) -> Vec<Product> {
        if self.products.is_empty() {
            demo_products().iter().map(ProductEntry::to_product).collect()
        } else {
            self.products.iter().map(ProductEntry::to_product).collect()
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
