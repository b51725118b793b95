//! Main database entry point for layerkv.
//!
//! [`Database`] is a cloneable, thread-safe handle to one store. Each call
//! takes a single lock for its whole duration, so every operation is atomic
//! with respect to other handles. All handles share one transaction stack:
//! this is one logical session, not a multi-client database.

use std::sync::Arc;

use layerkv_concurrency::WorkingView;
use layerkv_engine::{ReadStrategy, StoreMetrics, StoreOptions};
use layerkv_executor::{Command, Executor, Output};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Error, Result};

/// The layerkv database.
///
/// # Example
///
/// ```
/// use layerkv::prelude::*;
///
/// let db = Database::new();
/// db.begin()?;
/// db.set("a", "10")?;
/// db.begin()?;
/// db.set("b", "10")?;
/// assert_eq!(db.num_equal_to("10")?, 2);
///
/// // Commit is total: both transactions close
/// db.commit()?;
/// assert_eq!(db.depth(), 0);
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Default)]
pub struct Database {
    inner: Arc<Mutex<Executor>>,
}

impl Database {
    /// Create an empty database with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for database configuration.
    ///
    /// ```
    /// use layerkv::prelude::*;
    ///
    /// let db = Database::builder()
    ///     .read_strategy(ReadStrategy::Materialized)
    ///     .capacity(1024)
    ///     .open();
    /// assert!(!db.in_transaction());
    /// ```
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    fn with_options(options: StoreOptions) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Executor::with_options(options))),
        }
    }

    /// Execute a raw command under the lock.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        Ok(self.inner.lock().execute(cmd)?)
    }

    // =========================================================================
    // Key-value operations
    // =========================================================================

    /// Set `key` to `value`.
    ///
    /// Buffered in the innermost transaction if one is open.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        match self.execute(Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        })? {
            Output::Unit => Ok(()),
            _ => Err(unexpected("Set")),
        }
    }

    /// Get the value of `key` as seen through every open transaction.
    ///
    /// Returns `None` if the key doesn't exist or is unset in an open
    /// transaction.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match self.execute(Command::Get {
            key: key.to_string(),
        })? {
            Output::Maybe(v) => Ok(v),
            _ => Err(unexpected("Get")),
        }
    }

    /// Unset `key`.
    pub fn unset(&self, key: &str) -> Result<()> {
        match self.execute(Command::Unset {
            key: key.to_string(),
        })? {
            Output::Unit => Ok(()),
            _ => Err(unexpected("Unset")),
        }
    }

    /// Count keys whose current value is exactly `value`.
    pub fn num_equal_to(&self, value: &str) -> Result<usize> {
        match self.execute(Command::NumEqualTo {
            value: value.to_string(),
        })? {
            Output::Count(n) => Ok(n),
            _ => Err(unexpected("NumEqualTo")),
        }
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Open a nested transaction.
    pub fn begin(&self) -> Result<()> {
        self.unit(Command::Begin)
    }

    /// Discard the innermost transaction.
    ///
    /// Fails with [`Error::NoTransaction`] if none is open.
    pub fn rollback(&self) -> Result<()> {
        self.unit(Command::Rollback)
    }

    /// Commit every open transaction.
    ///
    /// Fails with [`Error::NoTransaction`] if none is open.
    pub fn commit(&self) -> Result<()> {
        self.unit(Command::Commit)
    }

    fn unit(&self, cmd: Command) -> Result<()> {
        let name = cmd.name();
        match self.execute(cmd)? {
            Output::Unit => Ok(()),
            _ => Err(unexpected(name)),
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of open transactions.
    pub fn depth(&self) -> usize {
        self.inner.lock().store().depth()
    }

    /// Check if any transaction is open.
    pub fn in_transaction(&self) -> bool {
        self.inner.lock().store().in_transaction()
    }

    /// Copy of the current working view.
    pub fn snapshot(&self) -> WorkingView {
        let guard = self.inner.lock();
        let view = guard.store().working_view();
        debug!(keys = view.len(), "snapshot");
        view
    }

    /// Transaction outcome counters.
    pub fn metrics(&self) -> StoreMetrics {
        self.inner.lock().store().metrics()
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Database");
        match self.inner.try_lock() {
            Some(guard) => s.field("depth", &guard.store().depth()),
            None => s.field("depth", &"<locked>"),
        };
        s.finish()
    }
}

fn unexpected(command: &str) -> Error {
    Error::Internal(format!("Unexpected output for {}", command))
}

/// Builder for database configuration.
#[derive(Debug, Clone, Default)]
pub struct DatabaseBuilder {
    options: StoreOptions,
}

impl DatabaseBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how reads resolve open transactions.
    pub fn read_strategy(mut self, strategy: ReadStrategy) -> Self {
        self.options = self.options.read_strategy(strategy);
        self
    }

    /// Pre-allocate room for `capacity` committed keys.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.options = self.options.capacity(capacity);
        self
    }

    /// Open the database.
    pub fn open(self) -> Database {
        Database::with_options(self.options)
    }
}
