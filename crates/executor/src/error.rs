//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Reported, not fatal**: Every error becomes a failure
//!   [`Response`](crate::Response) for the single invocation that raised it

use serde::{Deserialize, Serialize};
use treeledger_core::StoreError;

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Validation | `Arity`, `UnknownOperation` | Bad invocation, rejected before any store access |
/// | Store | `Store` | Failure reported by the ledger |
/// | Data | `Decode`, `Serialization` | Stored bytes or outgoing payload could not be (de)serialized |
///
/// # Example
///
/// ```ignore
/// use treeledger_executor::{Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::Arity { expected, actual, .. }) => {
///         println!("wanted {} arguments, got {}", expected, actual);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Wrong number of arguments for an operation
    #[error("incorrect number of arguments for {operation}: expecting {expected}, got {actual}")]
    Arity {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Operation name not recognized
    #[error("invalid function name: {name:?}")]
    UnknownOperation { name: String },

    // ==================== Store Errors ====================
    /// The underlying ledger failed
    #[error("store error: {reason}")]
    Store { reason: String },

    // ==================== Data Errors ====================
    /// Stored bytes are not a well-formed record
    #[error("decode error for key {key}: {reason}")]
    Decode { key: String, reason: String },

    /// A record or listing could not be encoded
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::Store {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}
