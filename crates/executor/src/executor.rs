//! Command dispatch.

use layerkv_engine::{StoreOptions, TransactionalStore};
use tracing::debug;

use crate::handlers::{kv, txn};
use crate::{Command, Output, Result};

/// Dispatches [`Command`]s to a [`TransactionalStore`] it owns.
///
/// One executor is one session: it carries the open transaction stack
/// between calls.
#[derive(Debug, Default)]
pub struct Executor {
    store: TransactionalStore,
}

impl Executor {
    /// Create an executor over an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor over an empty store with the given options
    pub fn with_options(options: StoreOptions) -> Self {
        Self::from_store(TransactionalStore::with_options(options))
    }

    /// Wrap an existing store
    pub fn from_store(store: TransactionalStore) -> Self {
        Self { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &TransactionalStore {
        &self.store
    }

    /// Take back the underlying store
    pub fn into_store(self) -> TransactionalStore {
        self.store
    }

    /// Execute one command.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        debug!(command = cmd.name(), write = cmd.is_write(), "execute");
        let store = &mut self.store;
        match cmd {
            Command::Set { key, value } => kv::set(store, key, value),
            Command::Get { key } => kv::get(store, &key),
            Command::Unset { key } => kv::unset(store, key),
            Command::NumEqualTo { value } => kv::num_equal_to(store, &value),
            Command::Begin => txn::begin(store),
            Command::Rollback => txn::rollback(store),
            Command::Commit => txn::commit(store),
        }
    }
}
