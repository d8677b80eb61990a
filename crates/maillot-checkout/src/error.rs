//! Checkout handoff errors.
//!
//! Every variant maps to a distinct user-visible outcome: `EmptyCart`
//! never leaves the process, `Rejected` carries the provider's message
//! verbatim, and the rest are transport-or-shape failures surfaced as a
//! generic "checkout failed" toast.

use thiserror::Error;

/// Errors from the payment-session handoff.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Caught before any request is made.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// The endpoint answered with an application-level error body.
    #[error("checkout rejected: {message}")]
    Rejected { message: String },

    /// The endpoint answered 2xx but the body matched neither the
    /// session shape nor the error shape.
    #[error("unrecognized checkout response")]
    MalformedResponse,

    /// Transport failure (connect, timeout, non-success status).
    #[error("checkout request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for checkout operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
