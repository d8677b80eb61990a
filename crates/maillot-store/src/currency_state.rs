//! # Currency State
//!
//! Holds the process-wide display-currency selection.
//!
//! ## Thread Safety
//! The selection is read on every price render and written only when the
//! shopper toggles the currency switcher, so an `RwLock` fits: many
//! concurrent readers, rare writers.
//!
//! ## Presentation Only
//! Switching currency never alters any stored canonical price - the cart
//! blob, the catalog, and the checkout payload all stay in canonical
//! cents. Only [`CurrencyState::format`] output changes.

use std::sync::{Arc, RwLock};

use tracing::debug;

use maillot_core::currency::Currency;
use maillot_core::money::Money;

// =============================================================================
// Currency State
// =============================================================================

/// Shared handle over the selected display currency.
///
/// Constructed once at startup and passed to whichever component renders
/// prices; defaults to CAD.
#[derive(Debug, Clone)]
pub struct CurrencyState {
    selected: Arc<RwLock<Currency>>,
}

impl CurrencyState {
    /// Creates the state with the default selection (CAD).
    pub fn new() -> Self {
        CurrencyState {
            selected: Arc::new(RwLock::new(Currency::default())),
        }
    }

    /// Returns the current selection.
    pub fn currency(&self) -> Currency {
        *self.selected.read().expect("currency lock poisoned")
    }

    /// Replaces the selection.
    pub fn set_currency(&self, currency: Currency) {
        debug!(currency = %currency, "currency switched");
        *self.selected.write().expect("currency lock poisoned") = currency;
    }

    /// Converts a canonical amount to the selected currency.
    pub fn convert(&self, canonical: Money) -> Money {
        self.currency().convert(canonical)
    }

    /// Formats a canonical amount under the selected currency.
    pub fn format(&self, canonical: Money) -> String {
        self.currency().format(canonical)
    }

    /// The active conversion rate in basis points (10 000 = identity).
    pub fn exchange_rate_bps(&self) -> u32 {
        self.currency().rate_bps()
    }
}

impl Default for CurrencyState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_cad() {
        let state = CurrencyState::new();
        assert_eq!(state.currency(), Currency::Cad);
        assert_eq!(state.exchange_rate_bps(), 14_000);
    }

    #[test]
    fn test_toggle_round_trip() {
        let state = CurrencyState::new();
        let canonical = Money::from_cents(1000); // $10.00 USD

        assert_eq!(state.format(canonical), "CA$14.00");

        state.set_currency(Currency::Usd);
        assert_eq!(state.format(canonical), "$10.00");
        assert_eq!(state.exchange_rate_bps(), 10_000);

        // Back again: canonical amount was never touched.
        state.set_currency(Currency::Cad);
        assert_eq!(state.format(canonical), "CA$14.00");
    }

    #[test]
    fn test_clone_shares_selection() {
        let state = CurrencyState::new();
        let view = state.clone();

        state.set_currency(Currency::Usd);
        assert_eq!(view.currency(), Currency::Usd);
    }
}
