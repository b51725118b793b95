//! Transaction lifecycle errors
//!
//! Missing keys are not errors: reads return `Option` and `unset` of an
//! absent key is a no-op. The only failure the store reports is closing a
//! transaction that was never opened.

use thiserror::Error;

/// Errors raised by `commit` and `rollback`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TxnError {
    /// `commit` or `rollback` called with an empty overlay stack
    #[error("NO TRANSACTION")]
    NoOpenTransaction,
}

/// Result type for transaction lifecycle operations
pub type Result<T> = std::result::Result<T, TxnError>;
