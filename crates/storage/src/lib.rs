//! Storage layer for layerkv
//!
//! This crate implements the two kinds of layer the working view is built
//! from:
//! - BaseStore: the committed key/value mapping
//! - Overlay: one transaction's buffered writes and tombstones
//!
//! Both are FxHashMap-backed and implement [`layerkv_core::Layer`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod base;
pub mod overlay;

pub use base::BaseStore;
pub use overlay::Overlay;
