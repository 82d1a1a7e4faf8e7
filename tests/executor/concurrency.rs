//! Concurrency Tests
//!
//! The executor is shared across threads; each invocation is independent.

use std::sync::Arc;
use std::thread;

use crate::common::*;
use treeledger::Record;

#[test]
fn executor_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<treeledger::Executor>();
}

#[test]
fn parallel_creates_on_distinct_keys_all_land() {
    let (executor, ledger) = create_executor();
    let executor = Arc::new(executor);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                for i in 0..25 {
                    let key = format!("CAR{}", t * 25 + i);
                    let record = Record::with_quantity(i.to_string());
                    assert!(executor.invoke("createEntry", create_args(&key, &record)).is_success());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ledger.len(), 200);
    let listing = expect_listing(&executor.invoke("queryAllOwners", vec![]));
    assert_eq!(listing.len(), 200);
}
