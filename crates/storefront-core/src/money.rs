//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    500.0 * 6 * 0.2 = 600.0000000000001  ❌ WRONG!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units + basis points                       │
//! │    50000 cents * 6 * 2000 bps / 10000 = 60000 cents  ✓                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::DiscountRate;
//!
//! let price = Money::from_major(500);           // $500.00
//! let subtotal = price.multiply_quantity(6);    // $3000.00
//! let discount = subtotal.percentage(DiscountRate::from_bps(2000));
//! assert_eq!(discount, Money::from_major(600));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::product::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed: a product may be built with a negative price and only rejected
/// when it is offered to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Creates a Money value from whole major units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole major units, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// The minor-unit remainder, always 0-99.
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the bounds of `i64`.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let line = Money::from_cents(299).multiply_quantity(3);
    /// assert_eq!(line.cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns `rate` percent of this amount, rounded half away from zero
    /// to the nearest cent.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::DiscountRate;
    ///
    /// let amount = Money::from_cents(1005);            // $10.05
    /// let ten_percent = DiscountRate::from_bps(1000);
    /// assert_eq!(amount.percentage(ten_percent).cents(), 101); // $1.005 → $1.01
    /// ```
    pub fn percentage(&self, rate: DiscountRate) -> Money {
        self.line_percentage(1, rate)
    }

    /// Returns `rate` percent of `self × qty` without materializing the
    /// line total in `i64`.
    ///
    /// ## Implementation
    /// `amount × qty` always fits in i128 (at most 2^126 in magnitude); only
    /// the basis-point factor can push it past. A result outside `i64`
    /// saturates to `i64::MIN` / `i64::MAX`.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::DiscountRate;
    ///
    /// let price = Money::from_cents(i64::MAX / 2);
    /// let discount = price.line_percentage(3, DiscountRate::from_bps(1000));
    /// assert_eq!(discount.cents(), 1_383_505_805_528_216_371);
    /// ```
    pub fn line_percentage(&self, qty: i64, rate: DiscountRate) -> Money {
        let line = self.0 as i128 * qty as i128;
        match line.checked_mul(rate.bps() as i128) {
            Some(scaled) => Money::from_scaled_bps(scaled),
            None if line < 0 => Money(i64::MIN),
            None => Money(i64::MAX),
        }
    }

    /// `scaled / 10000`, rounded half away from zero and clamped to `i64`.
    fn from_scaled_bps(scaled: i128) -> Money {
        let quotient = scaled / 10000;
        let remainder = scaled % 10000;
        let rounded = if remainder >= 5000 {
            quotient + 1
        } else if remainder <= -5000 {
            quotient - 1
        } else {
            quotient
        };
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================
//
// Arithmetic saturates instead of wrapping: a sum of discounts never flips
// sign.

/// Renders as `$10.99` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
