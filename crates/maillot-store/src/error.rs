//! # Store Error Type
//!
//! Errors surfaced by the state layer.
//!
//! ## What Is NOT an Error Here
//! A corrupt or schema-mismatched cart blob on startup is recovered
//! silently (empty cart, `warn!` log) and never reaches this type.
//! `StoreError` covers rejected inputs, failed *writes*, and storage
//! setup, which the UI surfaces as a toast.

use thiserror::Error;

use maillot_core::error::ValidationError;

/// Errors from the local-storage backend and store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A mutation was rejected before touching the cart.
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),

    /// Reading or writing the storage file failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the cart to JSON failed.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No platform data directory could be determined.
    ///
    /// ## When This Occurs
    /// `$HOME` is unset in a stripped-down environment and no explicit
    /// override was given.
    #[error("could not determine app data directory")]
    NoDataDir,
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
