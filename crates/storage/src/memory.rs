//! MemoryLedger: in-memory ordered ledger with BTreeMap and a write counter
//!
//! This module implements the LedgerStore trait using:
//! - `BTreeMap<String, Vec<u8>>` for byte-wise ordered key storage
//! - `parking_lot::RwLock` for thread-safe access
//! - `AtomicU64` for a monotonically increasing write version
//!
//! # Design Notes
//!
//! - **No version history**: Each key stores only its latest value
//! - **Lazy scans**: A scan remembers the last key it yielded and re-enters
//!   the map on each step, so an abandoned iterator holds no lock and no
//!   entry is fetched twice

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::trace;

use treeledger_core::{LedgerStore, RangeScan, StoreError, StoreResult};

/// In-memory ordered ledger
///
/// Implements the LedgerStore trait for embedding and tests.
/// Thread-safe through `parking_lot::RwLock` and `AtomicU64`.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    /// Ordered map from key to stored bytes
    data: RwLock<BTreeMap<String, Vec<u8>>>,
    /// Number of successful writes so far
    version: AtomicU64,
}

impl MemoryLedger {
    /// Create a new empty ledger
    ///
    /// Initial version is 0 (no writes have occurred).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the ledger holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Current write version
    ///
    /// Incremented by every successful `put`, including overwrites with an
    /// identical value.
    pub fn current_version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// All keys in order
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }
}

impl LedgerStore for MemoryLedger {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::invalid_key(key, "key must not be empty"));
        }
        self.data.write().insert(key.to_string(), value);
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(key, version, "put");
        Ok(())
    }

    fn scan(&self, start: &str, end: &str) -> StoreResult<RangeScan<'_>> {
        if start >= end {
            return Ok(Box::new(std::iter::empty()));
        }
        Ok(Box::new(MemoryRangeScan {
            data: &self.data,
            cursor: Bound::Included(start.to_string()),
            end: end.to_string(),
            exhausted: false,
        }))
    }
}

/// Cursor over `[cursor, end)` of a MemoryLedger
struct MemoryRangeScan<'a> {
    data: &'a RwLock<BTreeMap<String, Vec<u8>>>,
    /// Lower bound of the next step: the start key, then the last key yielded
    cursor: Bound<String>,
    end: String,
    exhausted: bool,
}

impl Iterator for MemoryRangeScan<'_> {
    type Item = StoreResult<(String, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let lower = match &self.cursor {
            Bound::Included(key) => Bound::Included(key.as_str()),
            Bound::Excluded(key) => Bound::Excluded(key.as_str()),
            Bound::Unbounded => Bound::Unbounded,
        };
        let next = self
            .data
            .read()
            .range::<str, _>((lower, Bound::Excluded(self.end.as_str())))
            .next()
            .map(|(k, v)| (k.clone(), v.clone()));

        match next {
            Some((key, value)) => {
                self.cursor = Bound::Excluded(key.clone());
                Some(Ok((key, value)))
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
