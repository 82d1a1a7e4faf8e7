//! Failure injection wrapper for any LedgerStore
//!
//! Faults are switched on and off at runtime through `&self`, so a test can
//! hand the wrapper to an executor behind an `Arc` and still steer it.

use std::collections::BTreeSet;

use parking_lot::RwLock;

use treeledger_core::{LedgerStore, RangeScan, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Faults {
    fail_get: bool,
    fail_put: bool,
    fail_put_keys: BTreeSet<String>,
    fail_scan: bool,
    fail_scan_after: Option<usize>,
}

/// LedgerStore wrapper that fails selected operations
#[derive(Debug)]
pub struct FaultyLedger<S> {
    inner: S,
    faults: RwLock<Faults>,
}

impl<S: LedgerStore> FaultyLedger<S> {
    /// Wrap a store with no faults enabled
    pub fn new(inner: S) -> Self {
        FaultyLedger {
            inner,
            faults: RwLock::new(Faults::default()),
        }
    }

    /// The wrapped store, for inspecting state behind the faults
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Fail every `get`
    pub fn fail_gets(&self, enabled: bool) {
        self.faults.write().fail_get = enabled;
    }

    /// Fail every `put`
    pub fn fail_puts(&self, enabled: bool) {
        self.faults.write().fail_put = enabled;
    }

    /// Fail `put` for one key only
    pub fn fail_put_for(&self, key: &str) {
        self.faults.write().fail_put_keys.insert(key.to_string());
    }

    /// Fail `scan` before it yields anything
    pub fn fail_scans(&self, enabled: bool) {
        self.faults.write().fail_scan = enabled;
    }

    /// Let a scan yield `items` entries, then yield one error and stop
    pub fn fail_scan_after(&self, items: usize) {
        self.faults.write().fail_scan_after = Some(items);
    }

    /// Disable all faults
    pub fn heal(&self) {
        *self.faults.write() = Faults::default();
    }
}

impl<S: LedgerStore> LedgerStore for FaultyLedger<S> {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        if self.faults.read().fail_get {
            return Err(StoreError::unavailable(format!("injected get failure for {}", key)));
        }
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        {
            let faults = self.faults.read();
            if faults.fail_put || faults.fail_put_keys.contains(key) {
                return Err(StoreError::unavailable(format!("injected put failure for {}", key)));
            }
        }
        self.inner.put(key, value)
    }

    fn scan(&self, start: &str, end: &str) -> StoreResult<RangeScan<'_>> {
        let (fail_scan, fail_after) = {
            let faults = self.faults.read();
            (faults.fail_scan, faults.fail_scan_after)
        };
        if fail_scan {
            return Err(StoreError::unavailable(format!(
                "injected scan failure for [{}, {})",
                start, end
            )));
        }

        let scan = self.inner.scan(start, end)?;
        match fail_after {
            None => Ok(scan),
            Some(items) => {
                let failure = std::iter::once(Err(StoreError::unavailable(format!(
                    "injected scan failure after {} items",
                    items
                ))));
                Ok(Box::new(scan.take(items).chain(failure)))
            }
        }
    }
}
