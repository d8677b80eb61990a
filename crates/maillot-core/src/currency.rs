//! # Currency Module
//!
//! Fixed-rate currency conversion and display formatting.
//!
//! ## Presentation, Not Storage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Currency Conversion Flow                             │
//! │                                                                         │
//! │  Product.price_cents (canonical USD) ── NEVER changes                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Currency::convert(price) ── identity for USD, ×1.40 for CAD           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Currency::format(price) ── "$120.00" or "CA$168.00"                   │
//! │                                                                         │
//! │  Switching currency re-renders prices; it never rewrites them.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Fixed Rate
//! The USD→CAD rate is a compile-time constant, not a live quote. This is a
//! deliberate simplification, not a stale cache: the storefront promises
//! "1 USD = 1.40 CAD" until the constant is changed and redeployed.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Constants
// =============================================================================

/// Fixed USD→CAD conversion rate in basis points of 1.0.
///
/// ## Why Basis Points?
/// 10 000 bps = ×1.00, so 14 000 bps = ×1.40. Expressing the rate as an
/// integer keeps the conversion in pure integer arithmetic.
pub const USD_TO_CAD_RATE_BPS: u32 = 14_000;

// =============================================================================
// Currency
// =============================================================================

/// The display currency selected for the storefront session.
///
/// ## Canonical vs Display
/// All stored prices are canonical USD cents. `Usd` is the canonical
/// currency (conversion is the identity); `Cad` applies the fixed rate.
///
/// ## Serialization
/// Serializes as the ISO 4217 code (`"CAD"` / `"USD"`) to match the
/// payment-session endpoint contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Canadian dollars - the storefront default.
    Cad,
    /// United States dollars - the canonical currency.
    Usd,
}

impl Currency {
    /// Returns the ISO 4217 currency code.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Cad => "CAD",
            Currency::Usd => "USD",
        }
    }

    /// Returns the display symbol used when formatting prices.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Cad => "CA$",
            Currency::Usd => "$",
        }
    }

    /// Returns the conversion rate from canonical USD, in basis points.
    ///
    /// 10 000 = identity. Exposed so the UI can show "1 USD = 1.40 CAD".
    #[inline]
    pub const fn rate_bps(&self) -> u32 {
        match self {
            Currency::Cad => USD_TO_CAD_RATE_BPS,
            Currency::Usd => 10_000,
        }
    }

    /// Converts a canonical (USD) amount to this currency.
    ///
    /// ## Behavior
    /// - `Usd`: returns the amount unchanged (canonical currency)
    /// - `Cad`: multiplies by the fixed rate with explicit rounding
    ///
    /// ## Implementation
    /// Integer math: `(cents * rate_bps + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use maillot_core::currency::Currency;
    /// use maillot_core::money::Money;
    ///
    /// let canonical = Money::from_cents(1000); // $10.00 USD
    /// assert_eq!(Currency::Usd.convert(canonical).cents(), 1000);
    /// assert_eq!(Currency::Cad.convert(canonical).cents(), 1400); // $14.00 CAD
    /// ```
    pub fn convert(&self, canonical: Money) -> Money {
        match self {
            Currency::Usd => canonical,
            Currency::Cad => {
                // Use i128 to prevent overflow on large amounts
                let converted =
                    (canonical.cents() as i128 * USD_TO_CAD_RATE_BPS as i128 + 5000) / 10_000;
                Money::from_cents(converted as i64)
            }
        }
    }

    /// Converts and renders a canonical amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use maillot_core::currency::Currency;
    /// use maillot_core::money::Money;
    ///
    /// let price = Money::from_cents(12000); // $120.00 USD canonical
    /// assert_eq!(Currency::Usd.format(price), "$120.00");
    /// assert_eq!(Currency::Cad.format(price), "CA$168.00");
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product card renders price
    ///      │
    ///      ▼
    /// Currency::format(price_cents) ← THIS FUNCTION
    ///      │
    ///      ├── CAD selected → "CA$168.00"
    ///      └── USD selected → "$120.00"
    /// ```
    pub fn format(&self, canonical: Money) -> String {
        let converted = self.convert(canonical);
        format!(
            "{}{}{}.{:02}",
            if converted.is_negative() { "-" } else { "" },
            self.symbol(),
            converted.dollars().abs(),
            converted.cents_part()
        )
    }
}

/// The storefront defaults to Canadian dollars.
impl Default for Currency {
    fn default() -> Self {
        Currency::Cad
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_is_identity() {
        let amount = Money::from_cents(12345);
        assert_eq!(Currency::Usd.convert(amount), amount);
    }

    #[test]
    fn test_cad_applies_fixed_rate() {
        // $10.00 USD × 1.40 = $14.00 CAD
        let amount = Money::from_cents(1000);
        assert_eq!(Currency::Cad.convert(amount).cents(), 1400);
    }

    #[test]
    fn test_conversion_rounds_half_up() {
        // 5 cents × 1.40 = 7.0 → 7
        assert_eq!(Currency::Cad.convert(Money::from_cents(5)).cents(), 7);
        // 3 cents × 1.40 = 4.2 → 4
        assert_eq!(Currency::Cad.convert(Money::from_cents(3)).cents(), 4);
        // 11 cents × 1.40 = 15.4 → 15
        assert_eq!(Currency::Cad.convert(Money::from_cents(11)).cents(), 15);
    }

    #[test]
    fn test_toggle_round_trip_over_two_states() {
        // The round trip is over the toggle, not over arbitrary rates:
        // the canonical amount is never rewritten, so switching back to USD
        // reproduces it exactly.
        let canonical = Money::from_cents(1000);
        assert_eq!(Currency::Cad.format(canonical), "CA$14.00");
        assert_eq!(Currency::Usd.format(canonical), "$10.00");
    }

    #[test]
    fn test_format() {
        let price = Money::from_cents(12000);
        assert_eq!(Currency::Usd.format(price), "$120.00");
        assert_eq!(Currency::Cad.format(price), "CA$168.00");

        assert_eq!(Currency::Usd.format(Money::from_cents(1)), "$0.01");
        assert_eq!(Currency::Usd.format(Money::zero()), "$0.00");
    }

    #[test]
    fn test_default_is_cad() {
        assert_eq!(Currency::default(), Currency::Cad);
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(serde_json::to_string(&Currency::Cad).unwrap(), "\"CAD\"");
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let parsed: Currency = serde_json::from_str("\"CAD\"").unwrap();
        assert_eq!(parsed, Currency::Cad);
    }
}
