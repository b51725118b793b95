//! Command execution layer for layerkv
//!
//! Every store operation is expressed as a [`Command`] value and produces an
//! [`Output`] value. Front ends (the CLI, the facade) build commands and
//! render outputs; only [`Executor`] touches the store.
//!
//! ```
//! use layerkv_executor::{Command, Executor, Output};
//!
//! let mut executor = Executor::new();
//! executor.execute(Command::Set { key: "a".into(), value: "10".into() }).unwrap();
//! let out = executor.execute(Command::NumEqualTo { value: "10".into() }).unwrap();
//! assert_eq!(out, Output::Count(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod error;
mod executor;
mod handlers;
mod output;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;

pub use layerkv_engine::{ReadStrategy, StoreOptions, TransactionalStore};
