//! Convenient imports for vstm.
//!
//! Re-exports the types almost every caller needs:
//!
//! ```
//! use vstm::prelude::*;
//!
//! let counter = TVar::new(0);
//! execute_transaction(|tx| {
//!     let n = counter.read(tx)?;
//!     counter.write(tx, n + 1)
//! })?;
//! # Ok::<(), TransactionError>(())
//! ```

// Entry points
pub use crate::{execute_transaction, execute_transaction_with};

// Transaction surface
pub use crate::{Transaction, TVar};

// Error handling and configuration
pub use crate::{Result, SetKind, TransactionError, TransactionOptions};
