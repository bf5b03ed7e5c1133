//! vstm: software transactional memory over versioned variables
//!
//! vstm lets independent threads read and write shared variables inside
//! atomic, isolated transactions without programmer-managed locks. Each
//! variable keeps an append-only chain of versioned values; a
//! transaction tracks what it read and writes locally, and at commit
//! time either publishes everything atomically or is transparently
//! re-run when a concurrent commit invalidated one of its reads.
//!
//! # Quick start
//!
//! ```
//! use vstm::{execute_transaction, TVar};
//!
//! let checking = TVar::new(100i64);
//! let savings = TVar::new(0i64);
//!
//! // Move 30 between the accounts atomically.
//! execute_transaction(|tx| {
//!     let from = checking.read(tx)?;
//!     let to = savings.read(tx)?;
//!     checking.write(tx, from - 30)?;
//!     savings.write(tx, to + 30)
//! })?;
//!
//! assert_eq!(checking.read_unversioned(), 70);
//! assert_eq!(savings.read_unversioned(), 30);
//! # Ok::<(), vstm::TransactionError>(())
//! ```
//!
//! # Caller contract
//!
//! A conflicted transaction is re-run from scratch, so the callback may
//! execute any number of times before one attempt commits. Keep it free
//! of externally visible side effects: no I/O, no channel sends, no
//! mutation outside the transaction. Everything expressed through
//! [`TVar::read`] and [`TVar::write`] is isolated and retried safely.
//!
//! # Errors
//!
//! [`execute_transaction`] returns exactly one of success or one
//! [`TransactionError`] variant. Conflicts never surface unless the
//! retry budget in [`TransactionOptions`] is exhausted; an explicit
//! [`Transaction::abort`] or a set-bound overflow surfaces immediately
//! and is never retried.
//!
//! The engine is purely in-memory and in-process: no durability, no
//! cross-process transactions, no nesting.

pub use vstm_concurrency::{
    execute_transaction, execute_transaction_with, Conflict, Transaction, TVar, ValidationResult,
};
pub use vstm_core::{Result, SetKind, TransactionError, TransactionOptions, VarId};

pub mod prelude;
