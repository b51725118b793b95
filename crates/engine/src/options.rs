//! Store configuration.
//!
//! Use the builder pattern to configure options:
//!
//! ```
//! use layerkv_engine::{ReadStrategy, StoreOptions};
//!
//! let opts = StoreOptions::new().read_strategy(ReadStrategy::Materialized);
//! assert_eq!(opts.read_strategy, ReadStrategy::Materialized);
//! ```

use std::fmt;
use std::str::FromStr;

/// How `get` resolves a key while transactions are open.
///
/// Both strategies return identical results; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadStrategy {
    /// Search layers top-down for the one key. No allocation.
    #[default]
    Lazy,
    /// Build the full working view, then look the key up.
    Materialized,
}

impl fmt::Display for ReadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadStrategy::Lazy => f.write_str("lazy"),
            ReadStrategy::Materialized => f.write_str("materialized"),
        }
    }
}

impl FromStr for ReadStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lazy" => Ok(ReadStrategy::Lazy),
            "materialized" => Ok(ReadStrategy::Materialized),
            other => Err(format!(
                "Unknown read strategy: {}. Use lazy or materialized",
                other
            )),
        }
    }
}

/// Options for constructing a [`crate::TransactionalStore`].
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Read path used by `get`
    pub read_strategy: ReadStrategy,
    /// Initial capacity of the base store
    pub capacity: usize,
}

impl StoreOptions {
    /// Default options: lazy reads, no pre-allocation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read strategy
    pub fn read_strategy(mut self, strategy: ReadStrategy) -> Self {
        self.read_strategy = strategy;
        self
    }

    /// Pre-allocate room for `capacity` committed keys
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
