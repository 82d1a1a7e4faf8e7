//! Range listing handler.
//!
//! Builds the `[{"Key": ..., "Record": ...}, ...]` document with serde_json.
//! Stored records are embedded verbatim as raw JSON, so field order and
//! content are exactly what was written.

use serde::Serialize;
use serde_json::value::RawValue;
use tracing::debug;
use treeledger_core::LedgerStore;

use crate::config::LedgerConfig;
use crate::{Error, Output, Result};

#[derive(Serialize)]
struct ListedRecord<'a> {
    #[serde(rename = "Key")]
    key: &'a str,
    #[serde(rename = "Record")]
    record: &'a RawValue,
}

/// Handle QueryAllOwners command.
pub fn query_all_owners(store: &dyn LedgerStore, config: &LedgerConfig) -> Result<Output> {
    let (start, end) = config.scan_range();

    let mut entries: Vec<(String, Box<RawValue>)> = Vec::new();
    for item in store.scan(&start, &end)? {
        let (key, value) = item?;
        let record = String::from_utf8(value)
            .map_err(|e| e.to_string())
            .and_then(|text| RawValue::from_string(text).map_err(|e| e.to_string()));
        match record {
            Ok(record) => entries.push((key, record)),
            Err(reason) => return Err(Error::Decode { key, reason }),
        }
    }

    let listing: Vec<ListedRecord<'_>> = entries
        .iter()
        .map(|(key, record)| ListedRecord { key, record })
        .collect();
    let json = serde_json::to_string(&listing)?;

    debug!(start = %start, end = %end, count = listing.len(), "listed records");
    Ok(Output::Json(json))
}
