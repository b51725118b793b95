//! Transaction command handlers.
//!
//! BEGIN, ROLLBACK, COMMIT

use layerkv_engine::TransactionalStore;

use crate::{Output, Result};

/// Handle Begin command.
pub fn begin(store: &mut TransactionalStore) -> Result<Output> {
    store.begin();
    Ok(Output::Unit)
}

/// Handle Rollback command.
pub fn rollback(store: &mut TransactionalStore) -> Result<Output> {
    store.rollback()?;
    Ok(Output::Unit)
}

/// Handle Commit command.
pub fn commit(store: &mut TransactionalStore) -> Result<Output> {
    store.commit()?;
    Ok(Output::Unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rollback_without_transaction_errors() {
        let mut store = TransactionalStore::new();
        let err = rollback(&mut store).unwrap_err();
        assert!(err.is_no_transaction());
        assert_eq!(err.to_string(), "NO TRANSACTION");
    }

    #[test]
    fn test_begin_commit() {
        let mut store = TransactionalStore::new();
        begin(&mut store).unwrap();
        assert_eq!(commit(&mut store).unwrap(), Output::Unit);
        assert!(commit(&mut store).unwrap_err().is_no_transaction());
    }
}
