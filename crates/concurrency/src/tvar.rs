//! Transactional variables
//!
//! A `TVar<T>` is the unit of shared, version-tracked state: one value
//! chain plus its versioning metadata. It is deliberately not `Clone`;
//! its identity is its id, and transactions borrow it for the duration
//! of an attempt.

use std::any::Any;

use vstm_chain::{ValueChain, VarMeta, VersionedValue};
use vstm_core::{Result, VarId};

use crate::transaction::{CommitVar, Transaction};

/// A shared variable readable and writable inside transactions
///
/// Reads and writes inside a transaction only touch transaction-local
/// state and the chain's lock-free snapshot; the only lock in the read
/// path is the brief shared lock of [`TVar::read_unversioned`].
pub struct TVar<T> {
    meta: VarMeta,
    chain: ValueChain<T>,
}

impl<T: Clone + Send + Sync + 'static> TVar<T> {
    /// A new variable holding `value` at version 0.
    pub fn new(value: T) -> Self {
        TVar {
            meta: VarMeta::new(),
            chain: ValueChain::new(value),
        }
    }

    /// This variable's unique id.
    pub fn id(&self) -> VarId {
        self.meta.id()
    }

    /// The last committed version.
    pub fn committed_version(&self) -> u64 {
        self.meta.committed_version()
    }

    /// Best-effort read outside any transaction.
    ///
    /// Takes a brief shared lock; atomic for this single call but with
    /// no isolation against later commits.
    pub fn read_unversioned(&self) -> T {
        let _shared = self.meta.read_guard();
        self.chain.snapshot().0
    }

    /// Read this variable inside a transaction.
    ///
    /// Returns the staged value if the transaction already wrote this
    /// variable, the cached snapshot if it already read it, and
    /// otherwise snapshots the chain and records the observed version
    /// for commit-time validation.
    ///
    /// # Errors
    ///
    /// `TooManyValues` if recording a first read would exceed the
    /// transaction's read-set bound.
    pub fn read<'env>(&'env self, tx: &mut Transaction<'env>) -> Result<T> {
        let id = self.meta.id();

        if let Some(pending) = tx.pending_value(id) {
            let value = pending
                .downcast_ref::<T>()
                .expect("staged value matches its variable's type");
            return Ok(value.clone());
        }

        if let Some(entry) = tx.cached_read(id) {
            let node = entry
                .cached
                .downcast_ref::<VersionedValue<T>>()
                .expect("cached node matches its variable's type");
            return Ok(node.value().clone());
        }

        let node = self.chain.snapshot_node();
        let value = node.value().clone();
        let version = node.version();
        tx.track_read(self, version, node)?;
        Ok(value)
    }

    /// Stage a write of `value` inside a transaction.
    ///
    /// The chain is untouched until commit; other transactions never
    /// see the staged value.
    ///
    /// # Errors
    ///
    /// `TooManyValues` if staging a first write would exceed the
    /// transaction's write-set bound.
    pub fn write<'env>(&'env self, tx: &mut Transaction<'env>, value: T) -> Result<()> {
        tx.stage_write(self, Box::new(value))
    }

    /// Drop this variable's retained history, keeping only the current
    /// value. Readers still holding older nodes keep them alive until
    /// they drop them.
    pub fn trim_history(&self) {
        let _writer = self.meta.write_guard();
        self.chain.detach_history();
    }
}

impl<T: Clone + Send + Sync + 'static> CommitVar for TVar<T> {
    fn meta(&self) -> &VarMeta {
        &self.meta
    }

    fn chain_version(&self) -> u64 {
        self.chain.version()
    }

    fn publish_pending(&self, pending: Box<dyn Any + Send>) -> u64 {
        let value = pending
            .downcast::<T>()
            .expect("staged value matches its variable's type");
        let base = self.chain.version();
        let version = self
            .chain
            .publish(*value, base)
            .expect("no concurrent publisher while the writer lock is held");
        self.meta.advance_to(version);
        version
    }
}
