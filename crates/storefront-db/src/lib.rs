//! # storefront-db: Data Store Connectivity
//!
//! The catalog itself is never persisted. This crate only answers one
//! question: is the configured data store reachable right now?
//!
//! ## Module Organization
//!
//! - [`store`] - `StoreConfig` and `DataStore::ping`
//! - [`error`] - `StoreUnavailableError`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_db::{DataStore, StoreConfig};
//!
//! let store = DataStore::new(StoreConfig::new("mysql://shop@localhost:3306/ecommerce"));
//! match store.ping().await {
//!     Ok(()) => println!("Database connected successfully!"),
//!     Err(e) => println!("Database connection failed: {e}"),
//! }
//! ```

pub mod error;
pub mod store;

pub use error::{StoreResult, StoreUnavailableError};
pub use store::{DataStore, StoreConfig, DEFAULT_CONNECT_TIMEOUT_SECS};
