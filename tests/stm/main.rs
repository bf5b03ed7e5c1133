//! STM Semantics Integration Tests
//!
//! End-to-end properties of the transaction engine through the public
//! facade: atomicity, isolation under conflict, bounded sets, and the
//! version chain's monotonicity.

mod bounds;
mod counters;
mod isolation;
