//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError            - Any domain failure                         │
//! │  ├── InvalidProductError  - Catalog admission refused                  │
//! │  └── ValidationError      - A single field failed its rule             │
//! │                                                                         │
//! │  storefront-db errors (separate crate)                                 │
//! │  └── StoreUnavailableError - Data store could not be reached           │
//! │                                                                         │
//! │  Flow: ValidationError → InvalidProductError → caller reports, goes on │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product was refused by the catalog.
    #[error(transparent)]
    InvalidProduct(#[from] InvalidProductError),

    /// Unknown category name.
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Invalid Product
// =============================================================================

/// Returned by [`Catalog::add`](crate::catalog::Catalog::add) when a product
/// does not satisfy `price > 0 AND quantity > 0`.
///
/// ## User Workflow
/// ```text
/// catalog.add(Product::clothing("Socks", $0.00, 3))
///      │
///      ▼
/// validate_product → MustBePositive { field: "price" }
///      │
///      ▼
/// InvalidProductError { name: "Socks", reason: .. }
///      │
///      ▼
/// Caller prints "Invalid price or quantity for product 'Socks': price must be positive"
/// and moves on to the next product
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid price or quantity for product '{name}': {reason}")]
pub struct InvalidProductError {
    /// Name of the rejected product.
    pub name: String,
    /// The first condition the product violated.
    #[source]
    pub reason: ValidationError,
}

impl InvalidProductError {
    pub fn new(name: impl Into<String>, reason: ValidationError) -> Self {
        InvalidProductError {
            name: name.into(),
            reason,
        }
    }

    /// The field that failed (`"price"` or `"quantity"`).
    pub fn field(&self) -> &str {
        self.reason.field()
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

impl ValidationError {
    pub fn must_be_positive(field: impl Into<String>) -> Self {
        ValidationError::MustBePositive {
            field: field.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MustBePositive { field } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
