//! Command Dispatch Tests
//!
//! End-to-end flows through `Executor::invoke` for every operation.

use crate::common::*;
use treeledger::{seed_records, Command, LedgerStore, Operation, Output, Record, Response};

// ============================================================================
// Seed and list
// ============================================================================

#[test]
fn init_then_list_returns_exactly_the_seeds_in_order() {
    let (executor, _ledger) = create_executor();

    assert!(executor.invoke("initLedger", vec![]).is_success());
    let listing = expect_listing(&executor.invoke("queryAllOwners", vec![]));

    let expected: Vec<(String, Record)> = seed_records()
        .into_iter()
        .enumerate()
        .map(|(i, r)| (format!("CAR{}", i), r))
        .collect();
    assert_eq!(listing, expected);
}

#[test]
fn init_is_idempotent() {
    let (executor, ledger) = create_executor();

    executor.invoke("initLedger", vec![]);
    let first = executor.invoke("queryAllOwners", vec![]);
    executor.invoke("initLedger", vec![]);
    let second = executor.invoke("queryAllOwners", vec![]);

    assert_eq!(first, second);
    assert_eq!(ledger.len(), 4);
}

#[test]
fn list_on_empty_ledger_is_literal_empty_array() {
    let (executor, _ledger) = create_executor();
    assert_eq!(
        executor.invoke("queryAllOwners", vec![]),
        Response::Success(b"[]".to_vec())
    );
}

#[test]
fn list_includes_created_entries_in_key_order() {
    let (executor, _ledger) = create_executor();
    executor.invoke("initLedger", vec![]);
    let oak = Record::new("Oak", "1 Main St", "ab12", "3", "$5.00", "Acme");
    executor.invoke("createEntry", create_args("CAR10", &oak));

    let keys: Vec<String> = expect_listing(&executor.invoke("queryAllOwners", vec![]))
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(keys, vec!["CAR0", "CAR1", "CAR10", "CAR2", "CAR3"]);
}

// ============================================================================
// Create, query, update
// ============================================================================

#[test]
fn create_query_update_query() {
    let (executor, _ledger) = create_executor();
    let oak = Record::new("Oak", "1 Main St", "ab12", "3", "$5.00", "Acme");

    assert!(executor.invoke("createEntry", create_args("CAR5", &oak)).is_success());
    let before = expect_record(&executor.invoke("queryHouseAddress", args(&["CAR5"])));
    assert_eq!(before, oak);

    assert!(executor
        .invoke("changeTreeQuantity", args(&["CAR5", "99"]))
        .is_success());
    let after = expect_record(&executor.invoke("queryHouseAddress", args(&["CAR5"])));

    assert_eq!(after.quantity, "99");
    assert_eq!(Record { quantity: "3".into(), ..after }, before);
}

#[test]
fn query_absent_key_is_empty_payload() {
    let (executor, _ledger) = create_executor();
    let response = executor.invoke("queryHouseAddress", args(&["CAR404"]));
    assert!(response.is_success());
    assert!(response.payload().is_empty());
}

#[test]
fn typed_and_named_paths_agree() {
    let (executor, _ledger) = create_executor();
    executor.invoke("initLedger", vec![]);

    let typed = executor.execute(Command::QueryAllOwners).unwrap();
    let named = executor.invoke("queryAllOwners", vec![]);
    match typed {
        Output::Json(json) => assert_eq!(json.as_bytes(), named.payload()),
        other => panic!("Expected Json output, got {:?}", other),
    }
}

// ============================================================================
// Arity
// ============================================================================

#[test]
fn every_wrong_arity_is_rejected_without_mutation() {
    let (executor, ledger) = create_executor();

    for op in Operation::ALL {
        for count in (0..12).filter(|&n| n != op.arity()) {
            let response = executor.invoke(op.name(), vec!["CAR1".to_string(); count]);
            assert!(!response.is_success(), "{} with {} args", op, count);
            assert!(response
                .message()
                .contains(&format!("expecting {}, got {}", op.arity(), count)));
        }
    }

    assert_eq!(ledger.current_version(), 0);
    assert!(ledger.get("CAR1").unwrap().is_none());
}

#[test]
fn create_entry_requires_key_plus_six_fields() {
    let (executor, ledger) = create_executor();

    let six = executor.invoke("createEntry", args(&["Oak", "1 Main St", "ab12", "3", "$5.00", "Acme"]));
    assert_eq!(
        six.message(),
        "incorrect number of arguments for createEntry: expecting 7, got 6"
    );
    assert!(ledger.is_empty());
}
