//! Key-value command handlers.
//!
//! SET, GET, UNSET, NUMEQUALTO

use layerkv_core::{Key, Value};
use layerkv_engine::TransactionalStore;

use crate::{Output, Result};

/// Handle Set command.
pub fn set(store: &mut TransactionalStore, key: Key, value: Value) -> Result<Output> {
    store.set(key, value);
    Ok(Output::Unit)
}

/// Handle Get command.
pub fn get(store: &TransactionalStore, key: &str) -> Result<Output> {
    Ok(Output::Maybe(store.get(key)))
}

/// Handle Unset command.
pub fn unset(store: &mut TransactionalStore, key: Key) -> Result<Output> {
    store.unset(key);
    Ok(Output::Unit)
}

/// Handle NumEqualTo command.
pub fn num_equal_to(store: &TransactionalStore, value: &str) -> Result<Output> {
    Ok(Output::Count(store.num_equal_to(value)))
}
