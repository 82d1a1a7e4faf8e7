//! Common test utilities for executor tests

use std::sync::Arc;

use treeledger::{Executor, MemoryLedger, Record, Response};

/// Create an executor over a fresh in-memory ledger
pub fn create_executor() -> (Executor, Arc<MemoryLedger>) {
    let ledger = Arc::new(MemoryLedger::new());
    (Executor::new(ledger.clone()), ledger)
}

/// Owned argument list
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// `createEntry` arguments for a key and record
pub fn create_args(key: &str, record: &Record) -> Vec<String> {
    vec![
        key.to_string(),
        record.kind.clone(),
        record.address.clone(),
        record.owner.clone(),
        record.quantity.clone(),
        record.credit.clone(),
        record.supplier.clone(),
    ]
}

/// Decode a successful query response
pub fn expect_record(response: &Response) -> Record {
    assert!(response.is_success(), "query failed: {}", response.message());
    Record::from_bytes(response.payload()).unwrap()
}

/// Decode a successful listing into (key, record) pairs
pub fn expect_listing(response: &Response) -> Vec<(String, Record)> {
    assert!(response.is_success(), "listing failed: {}", response.message());
    let items: Vec<serde_json::Value> = serde_json::from_slice(response.payload()).unwrap();
    items
        .into_iter()
        .map(|item| {
            let key = item["Key"].as_str().unwrap().to_string();
            let record = serde_json::from_value(item["Record"].clone()).unwrap();
            (key, record)
        })
        .collect()
}
