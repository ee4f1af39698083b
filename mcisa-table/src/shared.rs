//! Shared table handle for runtime specification reload.
//!
//! A built [`EncodingTable`] is immutable, so any number of readers may hold
//! references with no synchronization. Reloading a specification means
//! building a complete replacement table off to the side and swapping one
//! `Arc` for another; readers either see the old table or the new one,
//! never a mixture.

use crate::table::EncodingTable;
use std::sync::{Arc, RwLock};

/// Handle through which concurrent readers obtain the current table.
#[derive(Debug)]
pub struct SharedTable {
    current: RwLock<Arc<EncodingTable>>,
}

impl SharedTable {
    /// Wrap an initial table
    pub fn new(table: EncodingTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Snapshot of the current table. The snapshot stays valid (and
    /// unchanged) even if a replacement is published afterwards.
    pub fn load(&self) -> Arc<EncodingTable> {
        // The lock only ever guards a pointer swap; a poisoned guard still
        // holds a fully built table.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Publish a fully built replacement table in one atomic swap
    pub fn publish(&self, table: EncodingTable) {
        let table = Arc::new(table);
        match self.current.write() {
            Ok(mut guard) => *guard = table,
            Err(poisoned) => *poisoned.into_inner() = table,
        }
    }
}
