//! Core types for the vstm workspace
//!
//! This crate defines the foundational types used throughout the engine:
//! - VarId: Unique identity for transactional variables
//! - TransactionError: Error type hierarchy
//! - TransactionOptions: Per-execution configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::TransactionOptions;
pub use error::{Result, SetKind, TransactionError};
pub use types::VarId;
