//! # Cart Module
//!
//! Pure cart math: lines, totals, and the mutation rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Frontend Action          Store Method            Cart Change           │
//! │  ───────────────          ────────────            ───────────           │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_to_cart() ───────► lines[key].qty += 1  │
//! │                                                    or push new line     │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ───► lines[key].qty = n   │
//! │                                                    (n < 1: no-op)       │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► lines.retain(...)    │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ────────► lines.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by (product_id, size); adding the same pair again
//!   increments quantity instead of duplicating the line
//! - Quantity is always ≥ 1; a line with quantity < 1 never exists
//! - Removal goes through `remove_line` only - `set_quantity` with a value
//!   below 1 is a deliberate no-op, never an implicit delete
//! - Totals are recomputed on every read, never cached

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductCategory};

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart, keyed by (product_id, size).
///
/// ## Design Notes
/// - `product_id`: Reference to the product (for catalog lookup)
/// - Display fields (`name`, `category`, `origin`, `image`) and the unit
///   price are frozen copies taken at the moment of adding. The cart keeps
///   rendering consistently even if an admin edits the product afterwards.
/// - Different sizes of the same product are distinct lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product id (UUID) this line refers to.
    pub product_id: String,

    /// Free-text size chosen on the detail page ("S", "M", "XL", ...).
    pub size: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Category at time of adding (frozen).
    pub category: ProductCategory,

    /// Origin at time of adding (frozen).
    pub origin: String,

    /// Primary image URL at time of adding (frozen).
    pub image: String,

    /// Canonical unit price in USD cents at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price_cents: i64,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product and a chosen size.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the product price changes
    /// in the catalog, this line retains the original price.
    pub fn from_product(product: &Product, size: impl Into<String>) -> Self {
        CartLine {
            product_id: product.id.clone(),
            size: size.into(),
            name: product.name.clone(),
            category: product.category,
            origin: product.origin.clone(),
            image: product.image.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Checks whether this line matches a (product_id, size) key.
    #[inline]
    pub fn matches(&self, product_id: &str, size: &str) -> bool {
        self.product_id == product_id && self.size == size
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }

    /// The line total as a raw cent count (wire/totals form).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.line_total().cents()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered list of lines.
///
/// ## Ownership
/// The cart is owned exclusively by the store layer; the UI never mutates
/// lines directly. Order is insertion order and is preserved through the
/// local-storage round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Rehydrates a cart from previously stored lines.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart { lines }
    }

    /// Adds a product to the cart or increments quantity if already present.
    ///
    /// ## Behavior
    /// - Line with same (product.id, size) exists: quantity += 1
    /// - Otherwise: append a new line with quantity 1
    ///
    /// Never duplicates a line for the same key.
    pub fn add_line(&mut self, product: &Product, size: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(&product.id, size)) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::from_product(product, size));
    }

    /// Replaces the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity < 1`: silent no-op. This is a deliberate policy, not a
    ///   bug - removal must go through [`Cart::remove_line`].
    /// - Line not found: silent no-op.
    pub fn set_quantity(&mut self, product_id: &str, size: &str, quantity: i64) {
        if quantity < 1 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(product_id, size)) {
            line.quantity = quantity;
        }
    }

    /// Removes the line matching (product_id, size).
    ///
    /// Silent no-op when no line matches - removing an already removed
    /// line is not an error.
    pub fn remove_line(&mut self, product_id: &str, size: &str) {
        self.lines.retain(|l| !l.matches(product_id, size));
    }

    /// Clears all lines unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the number of distinct lines in the cart.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines (the badge count).
    ///
    /// Recomputed on every call, never stored.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Returns the cart total as Money.
    ///
    /// Recomputed on every call, never stored.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// The cart total as a raw cent count (wire/totals form).
    #[inline]
    pub fn total_cents(&self) -> i64 {
        self.total().cents()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart totals for UI responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct (product_id, size) lines.
    pub line_count: usize,
    /// Sum of quantities (badge count).
    pub total_quantity: i64,
    /// Sum of unit price × quantity, in canonical cents.
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Jersey {}", id),
            price_cents,
            category: ProductCategory::Cultural,
            origin: "Canada".to_string(),
            description: String::new(),
            image: format!("/images/{}.jpg", id),
            images: vec![],
            materials: "Polyester".to_string(),
        }
    }

    #[test]
    fn test_add_same_key_twice_increments_one_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 12000);

        cart.add_line(&product, "M");
        cart.add_line(&product, "M");

        // Exactly one line with quantity 2, never two lines.
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_different_sizes_are_distinct_lines() {
        let mut cart = Cart::new();
        let product = test_product("1", 12000);

        cart.add_line(&product, "M");
        cart.add_line(&product, "L");

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_totals_are_derived() {
        let mut cart = Cart::new();
        let a = test_product("1", 12000); // $120.00
        let b = test_product("2", 9500); // $95.00

        cart.add_line(&a, "M");
        cart.add_line(&a, "M");
        cart.add_line(&b, "S");

        assert_eq!(cart.total_cents(), 2 * 12000 + 9500);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.line_count(), 2);

        // Mutate and re-read: totals track the lines, nothing is stale.
        cart.set_quantity("2", "S", 4);
        assert_eq!(cart.total_cents(), 2 * 12000 + 4 * 9500);
        assert_eq!(cart.total_quantity(), 6);
    }

    #[test]
    fn test_set_quantity_below_one_is_noop() {
        let mut cart = Cart::new();
        let product = test_product("1", 12000);
        cart.add_line(&product, "M");

        cart.set_quantity("1", "M", 0);
        assert_eq!(cart.lines[0].quantity, 1);

        cart.set_quantity("1", "M", -3);
        assert_eq!(cart.lines[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_on_missing_line_is_noop() {
        let mut cart = Cart::new();
        let product = test_product("1", 12000);
        cart.add_line(&product, "M");

        let before = cart.clone();
        cart.set_quantity("1", "XL", 5);
        cart.set_quantity("nope", "M", 5);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_missing_line_is_noop() {
        let mut cart = Cart::new();
        let product = test_product("1", 12000);
        cart.add_line(&product, "M");

        let before = cart.clone();
        cart.remove_line("1", "XL");
        cart.remove_line("ghost", "M");
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 12000);
        cart.add_line(&product, "M");
        cart.add_line(&product, "L");

        cart.remove_line("1", "M");
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].size, "L");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        let product = test_product("1", 12000);
        cart.add_line(&product, "M");
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_line_freezes_product_fields() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 12000);
        cart.add_line(&product, "M");

        // Admin edits the product after it was added.
        product.price_cents = 99_999;
        product.name = "Renamed".to_string();

        assert_eq!(cart.lines[0].unit_price_cents, 12000);
        assert_eq!(cart.lines[0].name, "Jersey 1");
    }

    #[test]
    fn test_money_totals() {
        let mut cart = Cart::new();
        cart.add_line(&test_product("1", 12000), "M");
        cart.set_quantity("1", "M", 3);

        assert_eq!(cart.lines[0].line_total(), Money::from_cents(36000));
        assert_eq!(cart.total(), Money::from_cents(36000));
        assert_eq!(Cart::new().total(), Money::zero());
    }

    #[test]
    fn test_totals_snapshot() {
        let mut cart = Cart::new();
        cart.add_line(&test_product("1", 12000), "M");
        cart.add_line(&test_product("1", 12000), "M");

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.total_cents, 24000);
    }
}
