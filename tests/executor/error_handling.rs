//! Error Handling Tests
//!
//! Failures are returned as failure responses for the single invocation;
//! the executor stays usable and earlier writes stay in place.

use std::sync::Arc;

use crate::common::*;
use treeledger::testing::FaultyLedger;
use treeledger::{Executor, LedgerStore, MemoryLedger, STATUS_ERROR};

fn faulty() -> (Executor, Arc<FaultyLedger<MemoryLedger>>) {
    let ledger = Arc::new(FaultyLedger::new(MemoryLedger::new()));
    (Executor::new(ledger.clone()), ledger)
}

#[test]
fn unknown_operation_names_the_operation() {
    let (executor, _ledger) = create_executor();

    for name in ["queryCar", "InitLedger", "", "createEntry "] {
        let response = executor.invoke(name, vec![]);
        assert_eq!(response.status(), STATUS_ERROR);
        assert!(response.message().contains(&format!("{:?}", name)));
    }
}

#[test]
fn executor_recovers_after_store_outage() {
    let (executor, ledger) = faulty();
    ledger.fail_puts(true);
    assert!(!executor.invoke("initLedger", vec![]).is_success());

    ledger.heal();
    assert!(executor.invoke("initLedger", vec![]).is_success());
    assert_eq!(ledger.inner().len(), 4);
}

#[test]
fn store_error_text_reaches_the_caller() {
    let (executor, ledger) = faulty();
    ledger.fail_scans(true);

    let response = executor.invoke("queryAllOwners", vec![]);
    assert!(response.message().contains("injected scan failure for [CAR0, CAR999)"));
}

#[test]
fn decode_error_names_the_key() {
    let (executor, ledger) = create_executor();
    ledger.put("CAR8", b"<xml/>".to_vec()).unwrap();

    let response = executor.invoke("changeTreeQuantity", args(&["CAR8", "1"]));
    assert!(response.message().starts_with("decode error for key CAR8"));

    let listing = executor.invoke("queryAllOwners", vec![]);
    assert!(listing.message().starts_with("decode error for key CAR8"));
}
