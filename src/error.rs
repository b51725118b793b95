//! Unified error types for layerkv.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use thiserror::Error;

/// All layerkv errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `commit` or `rollback` with no open transaction
    #[error("no open transaction")]
    NoTransaction,

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for layerkv operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is the no-open-transaction error.
    pub fn is_no_transaction(&self) -> bool {
        matches!(self, Error::NoTransaction)
    }
}

impl From<layerkv_core::TxnError> for Error {
    fn from(e: layerkv_core::TxnError) -> Self {
        match e {
            layerkv_core::TxnError::NoOpenTransaction => Error::NoTransaction,
        }
    }
}

impl From<layerkv_executor::Error> for Error {
    fn from(e: layerkv_executor::Error) -> Self {
        match e {
            layerkv_executor::Error::Transaction(txn) => txn.into(),
        }
    }
}
