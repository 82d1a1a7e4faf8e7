//! # treeledger Executor
//!
//! The public API for treeledger - a tree credit record manager layered on an
//! ordered key-value ledger.
//!
//! This is the only crate hosts need to import. It provides:
//! - [`Executor`] - Stateless dispatcher: `invoke(name, args) -> Response`
//! - [`Command`]/[`Output`] - Typed command interface
//! - [`Operation`] - The operation table with each operation's arity
//! - [`LedgerConfig`] - Key convention, decode policy and logging settings
//!
//! ## Quick Start
//!
//! ```text
//! use std::sync::Arc;
//! use treeledger_executor::Executor;
//! use treeledger_storage::MemoryLedger;
//!
//! let executor = Executor::new(Arc::new(MemoryLedger::new()));
//!
//! executor.invoke("initLedger", vec![]);
//! let response = executor.invoke("queryHouseAddress", vec!["CAR0".into()]);
//! ```
//!
//! ## Operations
//!
//! | Operation | Arguments | Result |
//! |-----------|-----------|--------|
//! | `queryHouseAddress` | key | stored record bytes, empty if absent |
//! | `initLedger` | - | seeds `CAR0`..`CAR3` |
//! | `createEntry` | key, types, address, owner, quantity, credit, company | - |
//! | `queryAllOwners` | - | JSON array of `{"Key", "Record"}` |
//! | `changeTreeQuantity` | key, quantity | - |

#![warn(missing_docs)]

mod command;
pub mod config;
mod error;
mod executor;
mod invocation;
pub mod logging;
mod output;
mod seed;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything hosts need is re-exported here
// =============================================================================

pub use command::{Command, Operation};
pub use config::{ConfigError, LedgerConfig, LoggingConfig};
pub use error::Error;
pub use executor::Executor;
pub use invocation::Invocation;
pub use output::{Output, Response, STATUS_ERROR, STATUS_OK};
pub use seed::seed_records;

// Re-export core types so hosts don't need treeledger-core directly
pub use treeledger_core::{LedgerStore, RangeScan, Record, StoreError, StoreResult};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
