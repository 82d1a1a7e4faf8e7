//! Core types and traits for treeledger
//!
//! This crate defines the foundational types used throughout the system:
//! - Record: The six-field tree credit entity stored under a single key
//! - StoreError: Error type for the key-value ledger boundary
//! - Traits: The LedgerStore abstraction (point read, point write, range scan)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use record::Record;
pub use traits::{LedgerStore, RangeScan};
