//! treeledger - tree credit record manager over an ordered key-value ledger
//!
//! treeledger accepts named operations with string arguments, turns them into
//! reads and writes against a ledger, and returns a payload or a failure
//! message.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use treeledger::{Executor, MemoryLedger};
//!
//! let executor = Executor::new(Arc::new(MemoryLedger::new()));
//!
//! executor.invoke("initLedger", vec![]);
//! let listing = executor.invoke("queryAllOwners", vec![]);
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`]. The ledger itself sits behind
//! the [`LedgerStore`] trait; [`MemoryLedger`] is the in-memory
//! implementation used for embedding and tests.

// Re-export the public API from treeledger-executor
pub use treeledger_executor::*;

pub use treeledger_storage::{testing, MemoryLedger};
