//! # Money Module
//!
//! Monetary values as integer cent counts.
//!
//! ## Why Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Canonical prices are i64 cent counts, end to end:                      │
//! │                                                                         │
//! │    Product.price_cents ──► CartLine unit price ──► line totals          │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                            cart total ──► checkout wire format          │
//! │                                                                         │
//! │  No floats anywhere. The only rounding in the system happens in the     │
//! │  display-currency conversion (currency.rs), with explicit integer       │
//! │  arithmetic.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use maillot_core::money::Money;
//!
//! let unit = Money::from_cents(12000);        // $120.00
//! let line = unit * 3;                        // quantity 3 → $360.00
//! let total = line + Money::from_cents(9500); // + $95.00 → $455.00
//! assert_eq!(total.cents(), 45500);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Signed so that adjustments and refunds can be represented; the cart
/// itself only ever produces non-negative amounts. The surface is kept
/// deliberately small: construction from cents, the two operations cart
/// math needs (`+` for totals, `* i64` for quantities), and the accessors
/// formatting needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a cent count.
    ///
    /// ## Example
    /// ```rust
    /// use maillot_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// The zero amount (an empty cart's total).
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Returns the raw cent count.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the sub-dollar portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as a plain dollar amount (`$10.99`, `-$5.50`).
///
/// Used for logs and debugging; UI display goes through
/// [`crate::currency::Currency::format`], which honors the selected
/// currency's symbol and rate.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Summing line totals into the cart total.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Unit price × quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
