//! Testing utilities for the ledger boundary
//!
//! This module provides tools for exercising failure paths above the store:
//!
//! - **FaultyLedger**: Wraps any `LedgerStore` and fails reads, writes or
//!   scans on demand
//!
//! # Example
//!
//! ```ignore
//! use treeledger_storage::{testing::FaultyLedger, MemoryLedger};
//!
//! let ledger = FaultyLedger::new(MemoryLedger::new());
//! ledger.fail_put_for("CAR2");
//! // Writes to CAR2 now return StoreError::Unavailable
//! ```

mod faulty;

pub use faulty::FaultyLedger;
