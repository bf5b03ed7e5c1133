//! Concurrency layer for vstm
//!
//! This crate implements optimistic software transactional memory:
//! - Transaction: per-attempt read/write-set tracking
//! - TVar: transactional variable over a versioned value chain
//! - Conflict detection at commit time (read-set validation)
//! - Sorted-lock commit protocol and the retrying execution driver

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod manager;
pub mod transaction;
pub mod tvar;
pub mod validation;

pub use driver::{execute_transaction, execute_transaction_with};
pub use transaction::Transaction;
pub use tvar::TVar;
pub use validation::{Conflict, ValidationResult};
