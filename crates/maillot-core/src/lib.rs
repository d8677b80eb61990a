//! # maillot-core: Pure Business Logic for the Maillot Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Maillot Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (SPA)                               │   │
//! │  │    Shop UI ──► Cart Drawer ──► Checkout ──► Admin Dashboard     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    maillot-store                                │   │
//! │  │    CartStore, CatalogStore, CurrencyState, ToastNotifier        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ maillot-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   seed    │  │   │
//! │  │   │  Category │  │ Currency  │  │ CartLine  │  │  export   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductCategory)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`currency`] - Fixed-rate currency conversion and formatting
//! - [`cart`] - Cart and cart-line math
//! - [`catalog`] - In-memory product catalog with seed data
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use maillot_core::money::Money;
//! use maillot_core::currency::Currency;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(1000); // $10.00 canonical (USD)
//!
//! // Convert for display under the selected currency
//! let displayed = Currency::Cad.convert(price);
//! assert_eq!(displayed.cents(), 1400); // ×1.40 fixed rate
//!
//! // Render with the currency's symbol
//! assert_eq!(Currency::Cad.format(price), "CA$14.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod currency;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use maillot_core::Money` instead of
// `use maillot_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::Catalog;
pub use currency::Currency;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Product, ProductCategory};
