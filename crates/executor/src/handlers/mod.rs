//! Command handlers, one module per command family.

pub mod kv;
pub mod txn;
