//! Variable identity
//!
//! Every transactional variable gets a process-wide unique, monotonically
//! increasing id at construction. The id doubles as the global lock
//! ordering key during commit, so it must be totally ordered.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide id allocator. Starts at 1 so ids are never zero.
static NEXT_VAR_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a transactional variable
///
/// Ids are allocated once at variable construction and never reused
/// within a process. Their total order fixes the commit-time lock
/// acquisition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(u64);

impl VarId {
    /// Allocate the next unique id.
    pub fn allocate() -> Self {
        VarId(NEXT_VAR_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Raw numeric value of this id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var#{}", self.0)
    }
}
