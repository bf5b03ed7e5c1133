//! Error types for the transaction engine
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Exactly one of success or one error variant is produced per execution:
//! commit conflicts are retried internally and only surface as
//! [`TransactionError::Retry`] once the retry budget is spent.

use std::fmt;
use thiserror::Error;

/// Result type alias for transaction operations
pub type Result<T> = std::result::Result<T, TransactionError>;

/// Which bounded transaction set overflowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetKind {
    /// The read set (`max_read_var` bound)
    Reads,
    /// The write set (`max_write_var` bound)
    Writes,
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetKind::Reads => write!(f, "read"),
            SetKind::Writes => write!(f, "write"),
        }
    }
}

/// Error types surfaced by transaction execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// The transaction conflicted with concurrent commits and exhausted
    /// its retry budget. Transient: a later execution may succeed.
    #[error("transaction conflicted and exhausted its retry budget")]
    Retry,

    /// The callback explicitly aborted the transaction. Terminal, never
    /// retried; staged writes are discarded.
    #[error("transaction aborted by the caller")]
    Abort,

    /// The transaction touched more distinct variables than the
    /// configured bound permits. Terminal; treated as a usage error.
    #[error("transaction touched more than {limit} distinct {set} variables")]
    TooManyValues {
        /// Which set hit its bound
        set: SetKind,
        /// The configured bound that was hit
        limit: usize,
    },
}

impl TransactionError {
    /// True for errors that must never be retried (abort, capacity
    /// overflow). `Retry` is the only transient variant.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionError::Retry)
    }
}
