//! Per-variable versioning metadata
//!
//! Couples a variable's identity with its committed-version mirror and
//! the reader/writer lock that gates commit-time publication. The
//! mirror tracks the chain head's version and is only advanced while
//! the writer lock is held, so outside an in-progress commit the two
//! always agree.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::atomic::{AtomicU64, Ordering};

use vstm_core::VarId;

/// Identity, committed version, and writer gate of one variable
pub struct VarMeta {
    id: VarId,
    version: AtomicU64,
    lock: RwLock<()>,
}

impl VarMeta {
    /// Fresh metadata with a newly allocated id at version 0.
    pub fn new() -> Self {
        VarMeta {
            id: VarId::allocate(),
            version: AtomicU64::new(0),
            lock: RwLock::new(()),
        }
    }

    /// This variable's unique id.
    pub fn id(&self) -> VarId {
        self.id
    }

    /// The last committed version. Readable without the lock.
    pub fn committed_version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Move the committed-version mirror forward after a publish.
    /// Caller must hold the writer lock.
    pub fn advance_to(&self, version: u64) {
        debug_assert!(version > self.committed_version());
        self.version.store(version, Ordering::SeqCst);
    }

    /// Shared lock for unversioned reads.
    pub fn read_guard(&self) -> RwLockReadGuard<'_, ()> {
        self.lock.read()
    }

    /// Exclusive lock for commit-time publication.
    pub fn write_guard(&self) -> RwLockWriteGuard<'_, ()> {
        self.lock.write()
    }
}

impl Default for VarMeta {
    fn default() -> Self {
        Self::new()
    }
}
