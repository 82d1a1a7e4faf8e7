//! Point read and write handlers.
//!
//! Every handler re-reads or re-writes the ledger; nothing is cached between
//! invocations.

use tracing::{debug, warn};
use treeledger_core::{LedgerStore, Record};

use crate::config::LedgerConfig;
use crate::seed::seed_records;
use crate::{Error, Output, Result};

/// Handle QueryHouseAddress command.
pub fn query_house_address(store: &dyn LedgerStore, key: String) -> Result<Output> {
    let value = store.get(&key)?;
    if value.is_none() {
        debug!(key = %key, "no record stored");
    }
    Ok(Output::Value(value))
}

/// Handle InitLedger command.
///
/// Every seed write is attempted even after a failure; the successful ones
/// stay in place and the failed keys are reported together.
pub fn init_ledger(store: &dyn LedgerStore, config: &LedgerConfig) -> Result<Output> {
    let records = seed_records();
    let total = records.len();
    let mut failed = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let key = config.seed_key(index);
        debug!(index, key = %key, "seeding record");

        let written = record
            .to_bytes()
            .map_err(Error::from)
            .and_then(|bytes| store.put(&key, bytes).map_err(Error::from));
        match written {
            Ok(()) => debug!(key = %key, "added"),
            Err(err) => {
                warn!(key = %key, error = %err, "seed write failed");
                failed.push(format!("{} ({})", key, err));
            }
        }
    }

    if failed.is_empty() {
        Ok(Output::Unit)
    } else {
        Err(Error::Store {
            reason: format!(
                "seeded {} of {} records, failed: {}",
                total - failed.len(),
                total,
                failed.join("; ")
            ),
        })
    }
}

/// Handle CreateEntry command.
pub fn create_entry(store: &dyn LedgerStore, key: String, record: Record) -> Result<Output> {
    let bytes = record.to_bytes()?;
    store.put(&key, bytes)?;
    debug!(key = %key, "put state");
    Ok(Output::Unit)
}

/// Handle ChangeTreeQuantity command.
///
/// A key with no stored value (or an empty one) starts from an empty
/// record. Malformed stored bytes fail with `Decode` unless the config
/// enables lenient decoding.
pub fn change_tree_quantity(
    store: &dyn LedgerStore,
    config: &LedgerConfig,
    key: String,
    quantity: String,
) -> Result<Output> {
    let mut record = match store.get(&key)? {
        None => Record::default(),
        Some(bytes) if bytes.is_empty() => Record::default(),
        Some(bytes) => match Record::from_bytes(&bytes) {
            Ok(record) => record,
            Err(err) if config.lenient_decode => {
                warn!(key = %key, error = %err, "stored record is malformed, starting from empty");
                Record::default()
            }
            Err(err) => {
                return Err(Error::Decode {
                    key,
                    reason: err.to_string(),
                })
            }
        },
    };

    record.quantity = quantity;
    store.put(&key, record.to_bytes()?)?;
    debug!(key = %key, quantity = %record.quantity, "quantity updated");
    Ok(Output::Unit)
}
