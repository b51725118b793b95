//! Transaction layering for layerkv
//!
//! This crate implements nested transactions as a stack of overlays on top
//! of the committed store:
//! - OverlayStack: open transactions, outermost first
//! - Working view resolution: merge every overlay over the base store,
//!   innermost layer wins, tombstones mask
//!
//! Two resolution strategies are provided. [`resolve_view`] materializes the
//! whole view and is what `commit` and value counting use. [`resolve_key`]
//! searches the layers top-down for a single key without allocating.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod stack;
pub mod view;

pub use stack::OverlayStack;
pub use view::{resolve_key, resolve_view, WorkingView};
