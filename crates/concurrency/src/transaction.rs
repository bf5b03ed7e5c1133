//! Transaction state for optimistic concurrency control
//!
//! A `Transaction` is the state of one attempt: every variable it read
//! (with the version observed) and every value it staged for writing.
//! Both sets are bounded and pre-sized at construction; hitting a bound
//! is a deterministic, terminal error. Nothing in here touches shared
//! state; writes stay local until the commit manager publishes them.
//!
//! # Read-your-writes
//!
//! When reading a variable, the lookup order is:
//! 1. **write set**: returns the staged, uncommitted value
//! 2. **read set**: returns the cached snapshot for the recorded version
//! 3. **chain**: snapshots the head and records a new read-set entry

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use vstm_chain::VarMeta;
use vstm_core::{Result, SetKind, TransactionError, TransactionOptions, VarId};

/// Process-wide attempt id allocator.
static NEXT_TXN_ID: AtomicU64 = AtomicU64::new(1);

/// Commit-side view of a transactional variable, independent of its
/// value type.
///
/// Type erasure lets one transaction track variables of different value
/// types; the concrete `TVar<T>` recovers its type when a staged value
/// comes back to it for publication.
pub(crate) trait CommitVar: Sync {
    /// Identity, committed-version mirror, and writer gate.
    fn meta(&self) -> &VarMeta;

    /// Current version at the chain head.
    fn chain_version(&self) -> u64;

    /// Publish a staged value on top of the current head and return the
    /// new version. Caller must hold this variable's writer lock.
    fn publish_pending(&self, pending: Box<dyn Any + Send>) -> u64;
}

/// One variable the transaction has read, and what it observed
pub(crate) struct ReadSetEntry<'env> {
    pub(crate) var: &'env dyn CommitVar,
    pub(crate) version_observed: u64,
    /// The snapshotted chain node, pinned so re-reads return the value
    /// belonging to `version_observed` without another chain access.
    pub(crate) cached: Arc<dyn Any + Send + Sync>,
}

/// One value the transaction intends to publish
pub(crate) struct WriteSetEntry<'env> {
    pub(crate) var: &'env dyn CommitVar,
    pub(crate) pending: Box<dyn Any + Send>,
}

/// State of a single transaction attempt
///
/// Created fresh for every attempt, including retries, and dropped when
/// the attempt ends. Never shared across threads. The lifetime ties the
/// transaction to the variables it touches, so a `TVar` cannot be
/// dropped or moved while an attempt holds entries for it.
pub struct Transaction<'env> {
    id: u64,
    read_set: Vec<ReadSetEntry<'env>>,
    write_set: Vec<WriteSetEntry<'env>>,
    max_read_var: usize,
    max_write_var: usize,
    terminal: Option<TransactionError>,
}

impl<'env> Transaction<'env> {
    /// Fresh attempt state with sets pre-sized to the configured bounds.
    pub fn new(options: &TransactionOptions) -> Self {
        Transaction {
            id: NEXT_TXN_ID.fetch_add(1, Ordering::SeqCst),
            read_set: Vec::with_capacity(options.max_read_var),
            write_set: Vec::with_capacity(options.max_write_var),
            max_read_var: options.max_read_var,
            max_write_var: options.max_write_var,
            terminal: None,
        }
    }

    /// Unique id of this attempt.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The terminal error recorded on this attempt, if any.
    pub fn error(&self) -> Option<&TransactionError> {
        self.terminal.as_ref()
    }

    /// Number of distinct variables read so far.
    pub fn tracked_reads(&self) -> usize {
        self.read_set.len()
    }

    /// Number of distinct variables with staged writes.
    pub fn staged_writes(&self) -> usize {
        self.write_set.len()
    }

    /// Explicitly abort this transaction.
    ///
    /// Records `Abort` in the terminal slot and returns it, so a
    /// callback can end with `return tx.abort();`. The driver surfaces
    /// the abort immediately; staged writes are never published.
    pub fn abort(&mut self) -> Result<()> {
        self.terminal = Some(TransactionError::Abort);
        Err(TransactionError::Abort)
    }

    /// The staged value for `id`, if this transaction wrote it.
    pub(crate) fn pending_value(&self, id: VarId) -> Option<&(dyn Any + Send)> {
        self.write_set
            .iter()
            .find(|entry| entry.var.meta().id() == id)
            .map(|entry| entry.pending.as_ref())
    }

    /// The read-set entry for `id`, if this transaction already read it.
    pub(crate) fn cached_read(&self, id: VarId) -> Option<&ReadSetEntry<'env>> {
        self.read_set.iter().find(|entry| entry.var.meta().id() == id)
    }

    /// Record a first read of a variable.
    pub(crate) fn track_read(
        &mut self,
        var: &'env dyn CommitVar,
        version_observed: u64,
        cached: Arc<dyn Any + Send + Sync>,
    ) -> Result<()> {
        if self.read_set.len() == self.max_read_var {
            return Err(self.overflow(SetKind::Reads, self.max_read_var));
        }
        self.read_set.push(ReadSetEntry {
            var,
            version_observed,
            cached,
        });
        Ok(())
    }

    /// Stage a write, overwriting any earlier staged value for the same
    /// variable.
    pub(crate) fn stage_write(
        &mut self,
        var: &'env dyn CommitVar,
        pending: Box<dyn Any + Send>,
    ) -> Result<()> {
        let id = var.meta().id();
        if let Some(entry) = self
            .write_set
            .iter_mut()
            .find(|entry| entry.var.meta().id() == id)
        {
            entry.pending = pending;
            return Ok(());
        }
        if self.write_set.len() == self.max_write_var {
            return Err(self.overflow(SetKind::Writes, self.max_write_var));
        }
        self.write_set.push(WriteSetEntry { var, pending });
        Ok(())
    }

    pub(crate) fn read_set(&self) -> &[ReadSetEntry<'env>] {
        &self.read_set
    }

    /// Hand the staged writes to the commit manager.
    pub(crate) fn take_write_set(&mut self) -> Vec<WriteSetEntry<'env>> {
        std::mem::take(&mut self.write_set)
    }

    /// Record a capacity overflow as this attempt's terminal error.
    fn overflow(&mut self, set: SetKind, limit: usize) -> TransactionError {
        let err = TransactionError::TooManyValues { set, limit };
        self.terminal = Some(err.clone());
        err
    }
}
