//! # maillot-checkout: Payment-Session Handoff
//!
//! Turns a cart snapshot into a hosted payment-page URL.
//!
//! ## Handoff Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Handoff                                     │
//! │                                                                         │
//! │  Checkout button                                                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CheckoutClient::create_session(cart, currency)                         │
//! │        │                                                                │
//! │        ├── cart empty? ──────────────► Err(EmptyCart)  (no request)     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  POST /create-checkout-session                                          │
//! │    { "cart": [...lines], "currency": "CAD" }                            │
//! │        │                                                                │
//! │        ├── { "id": ..., "url": ... } ─► Ok(CheckoutSession)             │
//! │        ├── { "error": "..." } ────────► Err(Rejected)                   │
//! │        └── transport failure ─────────► Err(Http)                       │
//! │                                                                         │
//! │  The caller navigates the shopper to session.url; the provider owns     │
//! │  everything after that (payment, confirmation, receipts).               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices cross the wire in canonical cents. The `currency` field is the
//! shopper's display selection, forwarded so the provider can price the
//! session in the currency the shopper was looking at.

pub mod client;
pub mod error;

pub use client::{CheckoutClient, CheckoutSession};
pub use error::{CheckoutError, CheckoutResult};
