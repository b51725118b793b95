//! Facade Test Suite
//!
//! Exercises the public `Database` handle end to end: key-value operations,
//! nested transaction lifecycle, and sharing one handle across threads.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test facade
//! cargo test --test facade transactions::
//! ```

use layerkv::prelude::*;

// Test modules
pub mod basic_ops;
pub mod concurrency;
pub mod properties;
pub mod transactions;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Both read strategies, so every behavioural test runs against each
pub fn all_databases() -> Vec<Database> {
    vec![
        Database::builder().read_strategy(ReadStrategy::Lazy).open(),
        Database::builder()
            .read_strategy(ReadStrategy::Materialized)
            .open(),
    ]
}

/// Database pre-loaded with `a=10`, `b=20`
pub fn seeded_database() -> Database {
    let db = Database::new();
    db.set("a", "10").unwrap();
    db.set("b", "20").unwrap();
    db
}
