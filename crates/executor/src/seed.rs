//! Demo records written by `initLedger`.

use treeledger_core::Record;

/// Seed rows in declaration order: types, address, owner, quantity, credit, company.
const SEED_ROWS: [[&str; 6]; 4] = [
    ["Blue Spruce", "2084 Mountbatten Place", "xr45h2", "6", "$22.33", "Tree Inc."],
    ["Red Maple", "3456 Oxford Street", "3yh654", "4", "$17.66", "Tree Inc."],
    ["Cucumber Tree", "837 Wharncliffe Road", "ij2c5g", "11", "$37.12", "Tree Inc."],
    ["Yellow Birch", "52 Irwin Street", "sw3hg6", "54", "$94.09", "Tree Inc."],
];

/// The demo records, in the order they are written.
pub fn seed_records() -> Vec<Record> {
    SEED_ROWS
        .iter()
        .map(|[kind, address, owner, quantity, credit, supplier]| {
            Record::new(*kind, *address, *owner, *quantity, *credit, *supplier)
        })
        .collect()
}
