//! # storefront-core: Pure Catalog Logic
//!
//! Products with per-category discounts, the admission rules, and the
//! in-memory catalog. No I/O of any kind lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/storefront (binary)                        │   │
//! │  │      config ──► build catalog ──► print report ──► ping store  │   │
//! │  └──────────────┬─────────────────────────────────────┬────────────┘   │
//! │                 │                                     │                 │
//! │  ┌──────────────▼──────────────────────┐   ┌──────────▼─────────────┐  │
//! │  │   ★ storefront-core (THIS CRATE) ★  │   │    storefront-db       │  │
//! │  │                                      │   │  DataStore::ping()     │  │
//! │  │  money · product · validation ·     │   │  (sqlx Any driver)     │  │
//! │  │  catalog                             │   └────────────────────────┘  │
//! │  │                                      │                              │
//! │  │  NO I/O • NO DATABASE • NO LOGGING   │                              │
//! │  └──────────────────────────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Product, Category, DiscountRate, Discountable
//! - [`validation`] - Admission rules
//! - [`catalog`] - Catalog and report rows
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Catalog, Discountable, Money, Product};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Product::electronics("Laptop", Money::from_major(50000), 2)).unwrap();
//! catalog.add(Product::clothing("T-Shirt", Money::from_major(500), 6)).unwrap();
//!
//! // Zero price: refused, catalog unchanged
//! assert!(catalog.add(Product::clothing("Socks", Money::zero(), 3)).is_err());
//! assert_eq!(catalog.len(), 2);
//!
//! for product in &catalog {
//!     println!("{}: {}", product.name(), product.calculate_discount());
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, DiscountLine};
pub use error::{CoreError, InvalidProductError, ValidationError};
pub use money::Money;
pub use product::{Category, DiscountRate, Discountable, Product};
