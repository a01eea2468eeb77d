//! # Validation Module
//!
//! Admission rules for the catalog.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product Lifecycle                                  │
//! │                                                                         │
//! │  Product::new(..)          ← no checks, any values accepted            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::add(product)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_product ← THIS MODULE                                        │
//! │       │                                                                 │
//! │       ├── quantity <= 0? → MustBePositive { field: "quantity" }        │
//! │       ├── price <= 0?    → MustBePositive { field: "price" }           │
//! │       │                                                                 │
//! │       └── OK → appended to the catalog                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_price, validate_quantity};
//! use storefront_core::Money;
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_price(Money::from_cents(0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::product::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a unit price. Zero is rejected along with negatives.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::must_be_positive("price"));
    }

    Ok(())
}

/// Validates a quantity. Zero is rejected along with negatives.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::must_be_positive("quantity"));
    }

    Ok(())
}

/// Checks everything a product must satisfy to enter the catalog.
///
/// Quantity is checked before price; when both are wrong the quantity
/// failure is the one reported.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_quantity(product.quantity())?;
    validate_price(product.price())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
