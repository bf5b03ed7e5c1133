//! Versioned value storage for vstm
//!
//! One chain per transactional variable, holding its committed history:
//! - VersionedValue: Immutable chain node (version, value, previous)
//! - ValueChain: Atomically swapped head with lock-free snapshots
//! - VarMeta: Per-variable id, committed-version mirror, and writer gate
//!
//! The chain is append-only. Readers snapshot the head without locking;
//! writers publish a new head through a single compare-and-swap. Old
//! nodes are reference counted and freed when the head chain and every
//! in-flight reader have dropped them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod meta;
pub mod node;

pub use chain::ValueChain;
pub use meta::VarMeta;
pub use node::{History, VersionedValue};
