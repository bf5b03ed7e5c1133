//! Immutable chain nodes
//!
//! A node is never mutated after publication. History forms a backward
//! singly linked list from the newest node; a node stays alive while the
//! head chain, an in-flight reader, or a transaction's read cache holds
//! its `Arc`.

use std::sync::Arc;

/// One committed version of a variable's value
///
/// Jointly owned by the chain head and by any reader that snapshotted it.
#[derive(Debug)]
pub struct VersionedValue<T> {
    version: u64,
    value: T,
    previous: Option<Arc<VersionedValue<T>>>,
}

impl<T> VersionedValue<T> {
    pub(crate) fn new(version: u64, value: T, previous: Option<Arc<VersionedValue<T>>>) -> Self {
        VersionedValue {
            version,
            value,
            previous,
        }
    }

    /// The version this value was committed at.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The committed value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node this one superseded, if still linked.
    pub fn previous(&self) -> Option<&Arc<VersionedValue<T>>> {
        self.previous.as_ref()
    }

    /// Walk the history backward, newest first, starting at this node.
    pub fn history(&self) -> History<'_, T> {
        History { next: Some(self) }
    }
}

/// Iterator over a chain's retained history, newest to oldest
pub struct History<'a, T> {
    next: Option<&'a VersionedValue<T>>,
}

impl<'a, T> Iterator for History<'a, T> {
    type Item = &'a VersionedValue<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.previous.as_deref();
        Some(node)
    }
}
