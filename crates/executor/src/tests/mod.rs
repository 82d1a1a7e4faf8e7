//! Test modules for the executor crate.


use std::sync::Arc;

use treeledger_storage::MemoryLedger;

use crate::Executor;

/// Create a test executor over a fresh in-memory ledger, returning both.
pub(crate) fn create_test_executor() -> (Executor, Arc<MemoryLedger>) {
    let ledger = Arc::new(MemoryLedger::new());
    let executor = Executor::new(ledger.clone());
    (executor, ledger)
}

/// Owned argument list from string slices.
pub(crate) fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
