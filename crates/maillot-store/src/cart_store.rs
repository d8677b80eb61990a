//! # Cart Store
//!
//! Owns the shopping cart and its local-storage persistence.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple UI handlers may access/modify the cart
//! 2. Only one handler should modify the cart at a time
//! 3. Mutation and the synchronous write-through must be atomic
//!
//! ## Persistence Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Persistence                                     │
//! │                                                                         │
//! │  Startup                                                                │
//! │  ───────                                                                │
//! │  CartStore::new(storage)                                                │
//! │        │                                                                │
//! │        ├── storage.read("cart") → Some(json) → parse → Cart             │
//! │        │                            │                                   │
//! │        │                            └── malformed → warn! → empty cart  │
//! │        └── None / read error ──────────────────────► empty cart         │
//! │                                                                         │
//! │  Every mutation                                                         │
//! │  ──────────────                                                         │
//! │  add_to_cart / update_quantity / remove_from_cart / clear_cart          │
//! │        │                                                                │
//! │        ├── mutate lines (under the Mutex)                               │
//! │        └── storage.write("cart", serialized lines)  ◄── synchronous     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Guarantee
//! Mutations are applied in the order the triggering UI events call in;
//! the Mutex serializes them, and the write-through happens before the
//! lock is released. No batching or reordering.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use maillot_core::cart::{Cart, CartLine, CartTotals};
use maillot_core::money::Money;
use maillot_core::types::Product;
use maillot_core::validation::{validate_quantity, validate_size};

use crate::error::StoreResult;
use crate::storage::{StorageBackend, CART_STORAGE_KEY};

// =============================================================================
// Cart Store
// =============================================================================

/// The cart store: exclusive owner of the [`Cart`].
///
/// ## Invariants
/// - No other component mutates the cart directly
/// - Every mutation synchronously rewrites the `"cart"` storage blob
/// - Derived values (total, count) are recomputed per read, never cached
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
    storage: Arc<dyn StorageBackend>,
    /// Whether the cart drawer is showing. Adding an item opens it.
    drawer_open: AtomicBool,
}

impl CartStore {
    /// Creates a cart store, rehydrating any previously stored cart.
    ///
    /// ## Recovery Behavior
    /// A missing key yields an empty cart. A malformed or
    /// schema-mismatched value is discarded silently (logged at `warn`,
    /// never surfaced to the user) and replaced with an empty cart.
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        let cart = match storage.read(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => {
                    debug!(lines = lines.len(), "rehydrated cart from storage");
                    Cart::from_lines(lines)
                }
                Err(e) => {
                    warn!(error = %e, "stored cart is malformed, resetting to empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "could not read stored cart, starting empty");
                Cart::new()
            }
        };

        CartStore {
            cart: Arc::new(Mutex::new(cart)),
            storage,
            drawer_open: AtomicBool::new(false),
        }
    }

    /// Adds one unit of a product in the chosen size.
    ///
    /// ## Behavior
    /// - A blank or oversized size label is rejected - it would corrupt
    ///   the (product_id, size) line key
    /// - Existing (product.id, size) line: quantity += 1
    /// - Otherwise: new line with quantity 1, price frozen now
    /// - Side effect: opens the cart drawer
    pub fn add_to_cart(&self, product: &Product, size: &str) -> StoreResult<CartTotals> {
        validate_size(size)?;
        debug!(product_id = %product.id, size = %size, "add_to_cart");

        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        cart.add_line(product, size);
        self.persist(&cart)?;
        self.drawer_open.store(true, Ordering::SeqCst);
        Ok(CartTotals::from(&*cart))
    }

    /// Removes the line matching (product_id, size).
    ///
    /// A missing line is a silent no-op, not an error; the storage blob
    /// is rewritten either way.
    pub fn remove_from_cart(&self, product_id: &str, size: &str) -> StoreResult<CartTotals> {
        debug!(product_id = %product_id, size = %size, "remove_from_cart");

        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        cart.remove_line(product_id, size);
        self.persist(&cart)?;
        Ok(CartTotals::from(&*cart))
    }

    /// Replaces the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity < 1`: silent no-op, nothing is written. Removal must
    ///   go through [`CartStore::remove_from_cart`] - this policy is
    ///   deliberate and matches the drawer's quantity stepper, which
    ///   disables the minus button at 1.
    /// - Missing line: silent no-op.
    pub fn update_quantity(
        &self,
        product_id: &str,
        size: &str,
        quantity: i64,
    ) -> StoreResult<CartTotals> {
        debug!(product_id = %product_id, size = %size, quantity, "update_quantity");

        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        if validate_quantity(quantity).is_err() {
            return Ok(CartTotals::from(&*cart));
        }

        cart.set_quantity(product_id, size, quantity);
        self.persist(&cart)?;
        Ok(CartTotals::from(&*cart))
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&self) -> StoreResult<()> {
        debug!("clear_cart");

        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        cart.clear();
        self.persist(&cart)
    }

    /// Returns a clone of the current cart lines in insertion order.
    pub fn lines(&self) -> Vec<CartLine> {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        cart.lines.clone()
    }

    /// Returns a full snapshot of the cart (for the checkout handoff).
    pub fn snapshot(&self) -> Cart {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        cart.clone()
    }

    /// Returns derived totals, recomputed from the lines.
    pub fn totals(&self) -> CartTotals {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        CartTotals::from(&*cart)
    }

    /// The cart total in canonical cents, as Money.
    pub fn cart_total(&self) -> Money {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        cart.total()
    }

    /// The badge count: sum of quantities across lines.
    pub fn cart_count(&self) -> i64 {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        cart.total_quantity()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        cart.is_empty()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_store.with_cart(|cart| cart.total_cents());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Whether the cart drawer should be showing.
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open.load(Ordering::SeqCst)
    }

    /// Toggles the cart drawer.
    pub fn toggle_drawer(&self) {
        self.drawer_open.fetch_xor(true, Ordering::SeqCst);
    }

    /// Closes the cart drawer.
    pub fn close_drawer(&self) {
        self.drawer_open.store(false, Ordering::SeqCst);
    }

    /// Serializes the lines to the `"cart"` blob.
    ///
    /// Called with the mutex held so the written blob always matches the
    /// in-memory cart.
    fn persist(&self, cart: &Cart) -> StoreResult<()> {
        debug!(total = %cart.total(), lines = cart.line_count(), "persisting cart");
        let blob = serde_json::to_string(&cart.lines)?;
        self.storage.write(CART_STORAGE_KEY, &blob)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
