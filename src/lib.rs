//! # layerkv
//!
//! In-memory key-value store with nested transactions.
//!
//! Writes made inside a transaction are buffered in an overlay. Reads see
//! every open overlay merged over the committed data, innermost first.
//! Rolling back discards only the innermost overlay; committing folds all of
//! them into the committed data at once.
//!
//! ## Quick Start
//!
//! ```
//! use layerkv::prelude::*;
//!
//! let db = Database::new();
//! db.set("a", "10")?;
//!
//! db.begin()?;
//! db.set("a", "30")?;
//! assert_eq!(db.get("a")?.as_deref(), Some("30"));
//!
//! db.rollback()?;
//! assert_eq!(db.get("a")?.as_deref(), Some("10"));
//!
//! // Nothing left to close
//! assert!(db.commit().unwrap_err().is_no_transaction());
//! # Ok::<(), layerkv::Error>(())
//! ```
//!
//! ## Crates
//!
//! - `layerkv-core` - slots, layers, transaction errors
//! - `layerkv-storage` - base store and overlays
//! - `layerkv-concurrency` - overlay stack and working-view resolution
//! - `layerkv-engine` - [`TransactionalStore`]
//! - `layerkv-executor` - [`Command`]/[`Output`] dispatch

#![warn(missing_docs)]

mod database;
mod error;

pub mod prelude;

// Re-export main entry points
pub use database::{Database, DatabaseBuilder};
pub use error::{Error, Result};

// Re-export lower layers
pub use layerkv_concurrency::WorkingView;
pub use layerkv_core::{Slot, TxnError};
pub use layerkv_engine::{ReadStrategy, StoreMetrics, StoreOptions, TransactionalStore};
pub use layerkv_executor::{Command, Executor, Output};
