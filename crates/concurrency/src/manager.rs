//! Commit coordination
//!
//! Implements the validate-then-apply half of the optimistic protocol:
//!
//! 1. Sort the write set's variables by id and take their writer locks
//!    in that order. The fixed global order rules out lock-wait cycles
//!    between concurrently committing transactions.
//! 2. Revalidate the read set under those locks. Without them, another
//!    committer could move a variable between our version check and our
//!    publish and the validation answer would be stale by the time we
//!    apply.
//! 3. On a clean validation, publish every staged value and advance
//!    each variable's committed-version mirror, then release the locks.
//!    On any stale read, release the locks having touched nothing.
//!
//! Commit blocks only on the write set's own locks, never globally.

use tracing::trace;

use crate::transaction::Transaction;
use crate::validation::{validate_read_set, ValidationResult};

/// Validate and publish one transaction attempt.
///
/// Consumes the attempt: on `Ok` every staged write is visible together;
/// on `Err` the attempt conflicted and no shared state was changed. A
/// conflict is not a caller-facing failure; the driver answers it by
/// re-running the callback against fresh state.
pub fn commit(mut tx: Transaction<'_>) -> Result<(), ValidationResult> {
    let write_set = tx.take_write_set();

    // Fixed global lock order: ascending variable id. Entries are
    // deduplicated at staging time, so no id is locked twice.
    let mut order: Vec<usize> = (0..write_set.len()).collect();
    order.sort_by_key(|&i| write_set[i].var.meta().id());

    let mut guards: Vec<parking_lot::RwLockWriteGuard<'_, ()>> =
        Vec::with_capacity(order.len());
    for &i in &order {
        let var = write_set[i].var;
        guards.push(var.meta().write_guard());
    }

    let result = validate_read_set(tx.read_set());
    if !result.is_valid() {
        trace!(
            txn_id = tx.id(),
            conflicts = result.conflict_count(),
            "commit validation failed"
        );
        return Err(result);
    }

    for entry in write_set {
        let var = entry.var;
        // The writer lock is held, so the publish CAS cannot lose.
        let version = var.publish_pending(entry.pending);
        trace!(txn_id = tx.id(), var_id = %var.meta().id(), version, "published");
    }

    Ok(())
}
