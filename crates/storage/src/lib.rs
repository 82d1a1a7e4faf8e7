//! Storage layer for treeledger
//!
//! This crate implements the in-memory ledger used to embed and test the
//! dispatcher:
//! - MemoryLedger: BTreeMap-based ordered store with RwLock
//! - Cursor-driven range scans that never hold the lock between items
//! - Write counter with AtomicU64
//! - testing::FaultyLedger: failure injection for error-path tests

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod testing;

pub use memory::MemoryLedger;
