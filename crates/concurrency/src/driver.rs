//! Transaction execution with automatic conflict retry
//!
//! The driver owns the attempt loop: fresh `Transaction`, user callback,
//! commit. Conflicts are recovered silently by re-running the callback
//! until the retry budget is spent; abort and capacity overflow are
//! terminal and surface immediately.
//!
//! # Caller contract
//!
//! The callback may run many times per call. It must not perform
//! externally visible, non-idempotent side effects; only the effects
//! of the final, committed attempt ever become visible through the
//! engine, but the engine cannot unwind anything else the callback did.

use tracing::{debug, trace};

use vstm_core::{Result, TransactionError, TransactionOptions};

use crate::manager;
use crate::transaction::Transaction;

/// Run `callback` as an atomic transaction with default options.
///
/// See [`execute_transaction_with`].
pub fn execute_transaction<'env, F>(callback: F) -> Result<()>
where
    F: FnMut(&mut Transaction<'env>) -> Result<()>,
{
    execute_transaction_with(callback, &TransactionOptions::default())
}

/// Run `callback` as an atomic transaction.
///
/// The callback reads and writes [`TVar`](crate::TVar)s through the
/// transaction handle it is given. When it returns cleanly the driver
/// validates and commits; on a conflict the attempt is discarded and
/// the callback re-run from scratch, up to `options.auto_retries`
/// times. A callback may also force a re-run by returning
/// [`TransactionError::Retry`] itself.
///
/// # Errors
///
/// - [`TransactionError::Abort`] - the callback aborted; nothing was
///   published and no retry happened.
/// - [`TransactionError::TooManyValues`] - a set bound was exceeded;
///   terminal like abort.
/// - [`TransactionError::Retry`] - every permitted attempt conflicted.
pub fn execute_transaction_with<'env, F>(
    mut callback: F,
    options: &TransactionOptions,
) -> Result<()>
where
    F: FnMut(&mut Transaction<'env>) -> Result<()>,
{
    let mut retries: u32 = 0;
    loop {
        let mut tx = Transaction::new(options);
        let outcome = callback(&mut tx);

        // Abort and capacity overflow are terminal no matter what the
        // callback returned afterwards.
        if let Some(err) = tx.error() {
            return Err(err.clone());
        }

        match outcome {
            Ok(()) => match manager::commit(tx) {
                Ok(()) => return Ok(()),
                Err(conflicts) => {
                    trace!(
                        attempt = retries,
                        conflicts = conflicts.conflict_count(),
                        "transaction conflicted"
                    );
                }
            },
            Err(TransactionError::Retry) => {
                trace!(attempt = retries, "callback requested retry");
            }
            Err(err) => return Err(err),
        }

        if retries >= options.auto_retries {
            debug!(retries, "retry budget exhausted");
            return Err(TransactionError::Retry);
        }
        retries += 1;
    }
}
