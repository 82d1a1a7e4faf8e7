//! Executor Layer Tests
//!
//! Tests for the public treeledger facade:
//! - Operation table and arity contracts
//! - Record CRUD and range listing through `invoke`
//! - Error surfacing from the ledger
//! - Properties over arbitrary record content

mod common;

mod command_dispatch;
mod concurrency;
mod error_handling;
mod properties;
