//! Executor errors.

use layerkv_core::TxnError;
use thiserror::Error;

/// Errors returned by [`crate::Executor::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `ROLLBACK` or `COMMIT` with no open transaction
    #[error("{0}")]
    Transaction(#[from] TxnError),
}

impl Error {
    /// Check if this is the no-open-transaction error
    pub fn is_no_transaction(&self) -> bool {
        matches!(self, Error::Transaction(TxnError::NoOpenTransaction))
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, Error>;
