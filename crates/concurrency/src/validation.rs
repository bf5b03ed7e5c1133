//! Commit-time read-set validation
//!
//! A transaction may publish only if every variable it read is still at
//! the version it observed. Validation reloads current chain versions,
//! including variables that are also in the write set, and accumulates
//! every mismatch instead of stopping at the first one.

use vstm_core::VarId;

use crate::transaction::ReadSetEntry;

/// One stale read detected during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// The variable whose version moved
    pub var_id: VarId,
    /// Version recorded when the transaction first read it
    pub observed: u64,
    /// Version found at validation time
    pub current: u64,
}

/// Outcome of validating a transaction's read set
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    conflicts: Vec<Conflict>,
}

impl ValidationResult {
    /// A passing result with no conflicts.
    pub fn ok() -> Self {
        ValidationResult::default()
    }

    /// True if the transaction may commit.
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// The stale reads found.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Number of stale reads found.
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    fn record(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }
}

/// Compare every read-set entry's observed version against the chain's
/// current version. Callers that need a stable answer must hold the
/// writer locks of the variables being committed.
pub(crate) fn validate_read_set(read_set: &[ReadSetEntry<'_>]) -> ValidationResult {
    let mut result = ValidationResult::ok();
    for entry in read_set {
        let current = entry.var.chain_version();
        if current != entry.version_observed {
            result.record(Conflict {
                var_id: entry.var.meta().id(),
                observed: entry.version_observed,
                current,
            });
        }
    }
    result
}
