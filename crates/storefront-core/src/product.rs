//! # Product Model
//!
//! Products, their categories and the per-category discount rule.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Model                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  Electronics ───┼──►│  1000 bps (10%) │       │
//! │  │  price (Money)  │   │  Clothing    ───┼──►│  2000 bps (20%) │       │
//! │  │  quantity       │   └─────────────────┘   └─────────────────┘       │
//! │  │  category       │                                                    │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  discount = price × quantity × rate(category)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Constructing a product never validates it. Whether a product is
//! acceptable is decided when it is offered to the
//! [`Catalog`](crate::catalog::Catalog).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(u32);

impl DiscountRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Category
// =============================================================================

/// The closed set of product categories.
///
/// ## Adding a Category
/// Add the variant, its arm in [`Category::discount_rate`] and its name in
/// [`Category::as_str`]. Nothing in the catalog changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 10% off.
    Electronics,
    /// 20% off.
    Clothing,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 2] = [Category::Electronics, Category::Clothing];

    /// The flat discount granted on products of this category.
    pub const fn discount_rate(&self) -> DiscountRate {
        match self {
            Category::Electronics => DiscountRate::from_bps(1000),
            Category::Clothing => DiscountRate::from_bps(2000),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownCategory(wanted.to_string()))
    }
}

// =============================================================================
// Discountable
// =============================================================================

/// Anything that can report the discount it is entitled to.
///
/// The catalog report and its totals go through this trait, so a new kind of
/// priced item only needs an impl here.
pub trait Discountable {
    fn calculate_discount(&self) -> Money;
}

// =============================================================================
// Product
// =============================================================================

/// A named, priced, quantified item of a fixed category.
///
/// `name`, `price` and `category` are fixed at construction; only the
/// quantity can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
    quantity: i64,
    category: Category,
}

impl Product {
    /// Assembles a product. No validation happens here.
    pub fn new(name: impl Into<String>, price: Money, quantity: i64, category: Category) -> Self {
        Product {
            name: name.into(),
            price,
            quantity,
            category,
        }
    }

    /// Shorthand for an [`Category::Electronics`] product.
    pub fn electronics(name: impl Into<String>, price: Money, quantity: i64) -> Self {
        Product::new(name, price, quantity, Category::Electronics)
    }

    /// Shorthand for a [`Category::Clothing`] product.
    pub fn clothing(name: impl Into<String>, price: Money, quantity: i64) -> Self {
        Product::new(name, price, quantity, Category::Clothing)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// `price × quantity`, the amount the discount is taken from.
    /// Saturates at `i64::MAX` for lines too large to represent.
    pub fn subtotal(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

impl Discountable for Product {
    /// `price × quantity × rate(category)`, computed in i128 and saturated
    /// to `i64`, so an admitted product never yields a negative discount.
    ///
    /// ```rust
    /// use storefront_core::{Discountable, Money, Product};
    ///
    /// let laptop = Product::electronics("Laptop", Money::from_major(50000), 2);
    /// assert_eq!(laptop.calculate_discount(), Money::from_major(10000));
    /// ```
    fn calculate_discount(&self) -> Money {
        self.price
            .line_percentage(self.quantity, self.category.discount_rate())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
