//! Property Tests
//!
//! Arbitrary record content survives every path through the executor.

use proptest::prelude::*;

use crate::common::*;
use treeledger::Record;

fn any_record() -> impl Strategy<Value = Record> {
    (".*", ".*", ".*", ".*", ".*", ".*").prop_map(|(kind, address, owner, quantity, credit, supplier)| {
        Record::new(kind, address, owner, quantity, credit, supplier)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn create_then_query_is_exact(record in any_record(), suffix in 0u32..999) {
        let (executor, _ledger) = create_executor();
        let key = format!("CAR{}", suffix);

        prop_assert!(executor.invoke("createEntry", create_args(&key, &record)).is_success());
        let stored = expect_record(&executor.invoke("queryHouseAddress", vec![key]));
        prop_assert_eq!(stored, record);
    }

    #[test]
    fn listing_is_well_formed_json(records in prop::collection::vec(any_record(), 0..8)) {
        let (executor, _ledger) = create_executor();
        for (i, record) in records.iter().enumerate() {
            executor.invoke("createEntry", create_args(&format!("CAR{}", i), record));
        }

        let listing = expect_listing(&executor.invoke("queryAllOwners", vec![]));
        prop_assert_eq!(listing.len(), records.len());
        for ((key, listed), (i, original)) in listing.iter().zip(records.iter().enumerate()) {
            prop_assert_eq!(key, &format!("CAR{}", i));
            prop_assert_eq!(listed, original);
        }
    }

    #[test]
    fn quantity_update_touches_only_quantity(record in any_record(), quantity in ".*") {
        let (executor, _ledger) = create_executor();
        executor.invoke("createEntry", create_args("CAR1", &record));

        executor.invoke("changeTreeQuantity", vec!["CAR1".to_string(), quantity.clone()]);
        let updated = expect_record(&executor.invoke("queryHouseAddress", args(&["CAR1"])));

        prop_assert_eq!(updated, Record { quantity, ..record });
    }
}
