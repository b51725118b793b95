//! Transactional store engine for layerkv
//!
//! [`TransactionalStore`] ties the committed base store and the overlay
//! stack together and exposes the full operation set: `set`, `get`,
//! `unset`, `num_equal_to`, `begin`, `rollback`, `commit`.
//!
//! The store is a plain single-session value with no interior locking.
//! Callers that share it across threads wrap it in a mutex for the duration
//! of each operation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod options;
pub mod store;

pub use options::{ReadStrategy, StoreOptions};
pub use store::{StoreMetrics, TransactionalStore};

pub use layerkv_core::TxnError;
pub use layerkv_concurrency::WorkingView;
