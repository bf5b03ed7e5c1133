//! Transaction execution options
//!
//! The engine is a library with no external configuration surface; all
//! tuning happens through this options struct passed to the driver.

/// Bounds and retry policy for one transaction execution
///
/// The set bounds cap how many distinct variables a single transaction
/// may touch, which bounds worst-case transaction memory and makes
/// overflow a deterministic, cheap check. The retry budget bounds
/// livelock under contention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionOptions {
    /// Maximum number of distinct variables in the read set.
    pub max_read_var: usize,

    /// Maximum number of distinct variables in the write set.
    pub max_write_var: usize,

    /// How many times a conflicted transaction is re-run before the
    /// driver gives up. `0` means a single attempt; the default is
    /// effectively unbounded.
    pub auto_retries: u32,
}

impl Default for TransactionOptions {
    fn default() -> Self {
        TransactionOptions {
            max_read_var: 64,
            max_write_var: 64,
            auto_retries: u32::MAX,
        }
    }
}

impl TransactionOptions {
    /// Options with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read-set bound.
    pub fn with_max_read_var(mut self, bound: usize) -> Self {
        self.max_read_var = bound;
        self
    }

    /// Set the write-set bound.
    pub fn with_max_write_var(mut self, bound: usize) -> Self {
        self.max_write_var = bound;
        self
    }

    /// Set the retry budget.
    pub fn with_auto_retries(mut self, retries: u32) -> Self {
        self.auto_retries = retries;
        self
    }
}
