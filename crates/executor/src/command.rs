//! Commands accepted by the executor.

use layerkv_core::{Key, Value};

/// A single store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set `key` to `value`. Returns [`crate::Output::Unit`].
    Set {
        /// Key to write
        key: Key,
        /// Value to store
        value: Value,
    },
    /// Read `key`. Returns [`crate::Output::Maybe`].
    Get {
        /// Key to read
        key: Key,
    },
    /// Unset `key`. Returns [`crate::Output::Unit`].
    Unset {
        /// Key to unset
        key: Key,
    },
    /// Count keys resolving to `value`. Returns [`crate::Output::Count`].
    NumEqualTo {
        /// Value to match exactly
        value: Value,
    },
    /// Open a nested transaction.
    Begin,
    /// Discard the innermost transaction.
    Rollback,
    /// Commit every open transaction.
    Commit,
}

impl Command {
    /// Protocol name of this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Unset { .. } => "UNSET",
            Command::NumEqualTo { .. } => "NUMEQUALTO",
            Command::Begin => "BEGIN",
            Command::Rollback => "ROLLBACK",
            Command::Commit => "COMMIT",
        }
    }

    /// Check if this command can change store state
    pub fn is_write(&self) -> bool {
        !matches!(self, Command::Get { .. } | Command::NumEqualTo { .. })
    }
}
