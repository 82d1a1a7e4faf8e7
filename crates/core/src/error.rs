//! Error types for the ledger boundary
//!
//! Everything a `LedgerStore` implementation can fail with is a `StoreError`.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Error types for the key-value ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Key rejected by the store (empty, reserved, ...)
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey {
        /// The offending key
        key: String,
        /// Why the store rejected it
        reason: String,
    },

    /// Store could not be reached or refused the request
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Unexpected failure inside the store
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Build an `InvalidKey` error.
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Build an `Unavailable` error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreError::Unavailable(reason.into())
    }
}
