//! Core trait for ledger access
//!
//! This module defines the LedgerStore trait that lets the dispatcher run
//! against any ordered key-value ledger without knowing how it is backed.

use crate::error::StoreResult;

/// Lazy, ordered sequence of `(key, value)` pairs produced by a range scan.
///
/// Each item is fetched when the iterator is advanced; dropping the iterator
/// early is always safe.
pub type RangeScan<'a> = Box<dyn Iterator<Item = StoreResult<(String, Vec<u8>)>> + 'a>;

/// Ordered key-value ledger abstraction
///
/// This is the only view of persistent state the dispatcher gets. The ledger
/// owns durability, isolation and ordering; implementations only have to
/// expose point reads, point writes and half-open range scans.
///
/// Thread safety: All methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait LedgerStore: Send + Sync {
    /// Get the current value stored under `key`
    ///
    /// Returns `None` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot serve the read.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// Overwrite semantics: no merge, no version check.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is rejected or the write fails.
    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()>;

    /// Scan keys in the half-open range `[start, end)`
    ///
    /// Results are in byte-wise lexicographic key order. Every entry in the
    /// range is yielded exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be started; failures while
    /// iterating surface as `Err` items.
    fn scan(&self, start: &str, end: &str) -> StoreResult<RangeScan<'_>>;
}
