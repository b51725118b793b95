//! Core types for layerkv
//!
//! This crate defines the vocabulary shared by every other layerkv crate:
//! - [`Slot`] / [`SlotRef`]: what a single layer says about a key
//! - [`Layer`]: read access to one layer of the working view
//! - [`TxnError`]: the transaction lifecycle error

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Result, TxnError};
pub use traits::Layer;
pub use types::{Key, Slot, SlotRef, Value};
