//! Append-only MVCC chain with a lock-free head
//!
//! The head pointer is an `ArcSwap`, so snapshots are plain atomic loads
//! and publication is one compare-and-swap. Between the version check
//! and the swap no lock is held; a concurrent publisher makes the CAS
//! fail and `publish` reports it, which is what turns a lost race into
//! a transaction conflict instead of a lost update.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::node::VersionedValue;

/// The committed history of one variable, published via its head node
pub struct ValueChain<T> {
    head: ArcSwap<VersionedValue<T>>,
}

impl<T> ValueChain<T> {
    /// Seed a chain with an initial value at version 0.
    pub fn new(initial: T) -> Self {
        ValueChain {
            head: ArcSwap::from_pointee(VersionedValue::new(0, initial, None)),
        }
    }

    /// Version of the current head. Lock-free.
    pub fn version(&self) -> u64 {
        self.head.load().version()
    }

    /// Pin the current head node. Lock-free; the returned `Arc` keeps
    /// the node (and its retained history) alive for the caller.
    pub fn snapshot_node(&self) -> Arc<VersionedValue<T>> {
        self.head.load_full()
    }

    /// Copy of the current head's value and its version. Lock-free and
    /// safe to call concurrently with `publish`.
    pub fn snapshot(&self) -> (T, u64)
    where
        T: Clone,
    {
        let head = self.head.load();
        (head.value().clone(), head.version())
    }

    /// Publish `value` as the new head if the current head is still at
    /// `expected_version`.
    ///
    /// On success returns the new version (`expected_version + 1`).
    /// Returns `None` without touching the chain if another publisher
    /// got there first, either before the load or between the load and
    /// the swap.
    pub fn publish(&self, value: T, expected_version: u64) -> Option<u64> {
        let current = self.head.load_full();
        if current.version() != expected_version {
            return None;
        }

        let next_version = expected_version + 1;
        let node = Arc::new(VersionedValue::new(
            next_version,
            value,
            Some(Arc::clone(&current)),
        ));

        let swapped = self.head.compare_and_swap(&current, node);
        if Arc::ptr_eq(&swapped, &current) {
            Some(next_version)
        } else {
            None
        }
    }

    /// Replace the head with a copy that drops its backward link,
    /// releasing retained history. Readers still holding old nodes keep
    /// them alive until they drop their own `Arc`s.
    pub fn detach_history(&self)
    where
        T: Clone,
    {
        self.head
            .rcu(|head| VersionedValue::new(head.version(), head.value().clone(), None));
    }
}
