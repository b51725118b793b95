//! Convenient imports for layerkv.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use layerkv::prelude::*;
//!
//! let db = Database::new();
//! db.set("key", "value")?;
//! # Ok::<(), Error>(())
//! ```

// Main entry point
pub use crate::database::{Database, DatabaseBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Configuration
pub use layerkv_engine::ReadStrategy;
