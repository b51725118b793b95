//! The transactional store
//!
//! ## Macro-states
//!
//! ```text
//! no transaction open      stack empty, set/unset write the base store
//! transaction(s) open      stack non-empty, set/unset write the top overlay
//! ```
//!
//! `begin` pushes an overlay. `rollback` pops one. `commit` folds every open
//! overlay into the base store in one step; there is no partial commit.

use layerkv_concurrency::{resolve_key, resolve_view, OverlayStack, WorkingView};
use layerkv_core::{Key, Result, TxnError, Value};
use layerkv_storage::BaseStore;
use tracing::{debug, info};

use crate::options::{ReadStrategy, StoreOptions};

/// Counters for transaction outcomes over the store's lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreMetrics {
    /// Successful `commit` calls
    pub commits: u64,
    /// Successful `rollback` calls
    pub rollbacks: u64,
    /// `commit`/`rollback` calls rejected with no open transaction
    pub rejected: u64,
}

/// In-memory key-value store with nested transactions
///
/// # Example
///
/// ```
/// use layerkv_engine::TransactionalStore;
///
/// let mut store = TransactionalStore::new();
/// store.set("a", "10");
/// store.begin();
/// store.set("a", "30");
/// assert_eq!(store.get("a").as_deref(), Some("30"));
/// store.rollback().unwrap();
/// assert_eq!(store.get("a").as_deref(), Some("10"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionalStore {
    base: BaseStore,
    stack: OverlayStack,
    options: StoreOptions,
    metrics: StoreMetrics,
}

impl TransactionalStore {
    /// Create an empty store with default options
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty store with the given options
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            base: BaseStore::with_capacity(options.capacity),
            stack: OverlayStack::new(),
            options,
            metrics: StoreMetrics::default(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Set `key` to `value` in the innermost open transaction, or directly
    /// in the base store if none is open.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, depth = self.stack.depth(), "set");
        match self.stack.top_mut() {
            Some(top) => top.set(key, value),
            None => self.base.insert(key, value),
        }
    }

    /// Unset `key`.
    ///
    /// With no transaction open the key is removed from the base store.
    /// Otherwise a tombstone is written to the innermost overlay, masking
    /// the key until that overlay is rolled back.
    pub fn unset(&mut self, key: impl Into<Key>) {
        let key = key.into();
        debug!(key = %key, depth = self.stack.depth(), "unset");
        match self.stack.top_mut() {
            Some(top) => top.delete(key),
            None => {
                self.base.remove(&key);
            }
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get the resolved value of `key`, reflecting every open transaction.
    ///
    /// Returns `None` if the key was never set or is masked by a tombstone.
    pub fn get(&self, key: &str) -> Option<Value> {
        if self.stack.is_empty() {
            return self.base.get(key).map(str::to_string);
        }
        match self.options.read_strategy {
            ReadStrategy::Lazy => resolve_key(&self.base, &self.stack, key).map(str::to_string),
            ReadStrategy::Materialized => {
                let mut view = resolve_view(&self.base, &self.stack);
                view.remove(key)
            }
        }
    }

    /// Count keys whose resolved value equals `value` exactly.
    pub fn num_equal_to(&self, value: &str) -> usize {
        if self.stack.is_empty() {
            return self.base.iter().filter(|(_, v)| *v == value).count();
        }
        resolve_view(&self.base, &self.stack)
            .values()
            .filter(|v| v.as_str() == value)
            .count()
    }

    /// Materialize the working view: what the store would hold after a commit
    pub fn working_view(&self) -> WorkingView {
        resolve_view(&self.base, &self.stack)
    }

    /// Borrow the committed state, ignoring open transactions
    pub fn committed(&self) -> &BaseStore {
        &self.base
    }

    // =========================================================================
    // Transaction lifecycle
    // =========================================================================

    /// Open a new, innermost transaction. Nesting is unbounded.
    pub fn begin(&mut self) {
        self.stack.push();
        debug!(depth = self.stack.depth(), "begin");
    }

    /// Discard the innermost transaction.
    ///
    /// Outer transactions and the base store are untouched.
    ///
    /// # Errors
    ///
    /// [`TxnError::NoOpenTransaction`] if no transaction is open. The store
    /// is left unchanged.
    pub fn rollback(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(overlay) => {
                self.metrics.rollbacks += 1;
                debug!(
                    discarded = overlay.len(),
                    depth = self.stack.depth(),
                    "rollback"
                );
                Ok(())
            }
            None => {
                self.metrics.rejected += 1;
                Err(TxnError::NoOpenTransaction)
            }
        }
    }

    /// Commit every open transaction.
    ///
    /// The working view replaces the base store and the overlay stack is
    /// cleared in the same step.
    ///
    /// # Errors
    ///
    /// [`TxnError::NoOpenTransaction`] if no transaction is open. The store
    /// is left unchanged.
    pub fn commit(&mut self) -> Result<()> {
        if self.stack.is_empty() {
            self.metrics.rejected += 1;
            return Err(TxnError::NoOpenTransaction);
        }

        let depth = self.stack.depth();
        let view = resolve_view(&self.base, &self.stack);
        self.base.replace(view);
        self.stack.clear();
        self.metrics.commits += 1;

        info!(depth, keys = self.base.len(), "commit");
        Ok(())
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of open transactions
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Check if any transaction is open
    pub fn in_transaction(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Configured options
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Transaction outcome counters
    pub fn metrics(&self) -> StoreMetrics {
        self.metrics
    }
}
