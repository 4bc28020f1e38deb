// CLASSIFICATION: COMMUNITY
// Filename: idspace.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-04-12

//! Device id allocation.
//!
//! Hands out small integer ids, smallest free first, and reclaims them on
//! release. One mutex serializes the table; the cooling device borrows the
//! same mutex for its latch transition so the subsystem keeps a single
//! lock order.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::warn;
use thiserror::Error;

/// Errors returned by [`IdAllocator`] operations.
#[derive(Debug, Error)]
pub enum IdSpaceError {
    #[error("id space exhausted")]
    Exhausted,
}

#[derive(Debug, Default)]
struct IdTable {
    next: u32,
    freed: BTreeSet<u32>,
}

/// Allocator handing out unique device ids.
#[derive(Debug, Default)]
pub struct IdAllocator {
    table: Mutex<IdTable>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the smallest id not currently outstanding.
    pub fn allocate(&self) -> Result<u32, IdSpaceError> {
        let mut table = self.lock();
        if let Some(id) = table.freed.pop_first() {
            return Ok(id);
        }
        if table.next == u32::MAX {
            return Err(IdSpaceError::Exhausted);
        }
        let id = table.next;
        table.next += 1;
        Ok(id)
    }

    /// Return an id to the pool. Ids that are not outstanding are ignored.
    pub fn release(&self, id: u32) {
        let mut table = self.lock();
        if id >= table.next || table.freed.contains(&id) {
            warn!("release of unallocated id {id}");
            return;
        }
        table.freed.insert(id);
    }

    /// Run `f` while holding the subsystem lock.
    ///
    /// `f` must not call back into the allocator.
    pub(crate) fn with_lock<T>(&self, f: impl FnOnce() -> T) -> T {
        let _table = self.lock();
        f()
    }

    /// Lock the table, recovering from poisoning.
    fn lock(&self) -> MutexGuard<'_, IdTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
