//! Nested transaction lifecycle.

use crate::*;

#[test]
fn test_rollback_restores_previous_state() {
    for db in all_databases() {
        db.set("a", "10").unwrap();
        let before = db.snapshot();

        db.begin().unwrap();
        db.set("a", "99").unwrap();
        db.set("new", "1").unwrap();
        db.unset("a").unwrap();
        db.rollback().unwrap();

        assert_eq!(db.snapshot(), before);
        assert!(!db.in_transaction());
    }
}

#[test]
fn test_innermost_wins_and_rollback_reveals_outer() {
    for db in all_databases() {
        db.begin().unwrap();
        db.set("k", "v1").unwrap();
        db.begin().unwrap();
        db.set("k", "v2").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("v2"));

        db.rollback().unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("v1"));
    }
}

#[test]
fn test_unset_in_transaction_then_rollback() {
    for db in all_databases() {
        db.set("k", "orig").unwrap();
        db.begin().unwrap();
        db.unset("k").unwrap();
        assert_eq!(db.get("k").unwrap(), None);

        db.rollback().unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("orig"));
    }
}

#[test]
fn test_commit_is_total() {
    let db = Database::new();
    db.begin().unwrap();
    db.set("a", "10").unwrap();
    db.begin().unwrap();
    db.set("b", "10").unwrap();
    db.commit().unwrap();

    assert_eq!(db.depth(), 0);
    assert_eq!(db.num_equal_to("10").unwrap(), 2);
    assert_eq!(db.rollback(), Err(Error::NoTransaction));
}

#[test]
fn test_lifecycle_without_transaction() {
    let db = seeded_database();
    let before = db.snapshot();

    assert!(db.rollback().unwrap_err().is_no_transaction());
    assert!(db.commit().unwrap_err().is_no_transaction());
    assert_eq!(db.snapshot(), before);

    let metrics = db.metrics();
    assert_eq!(metrics.rejected, 2);
}

#[test]
fn test_num_equal_to_sees_open_transactions() {
    for db in all_databases() {
        db.set("a", "10").unwrap();
        db.set("b", "10").unwrap();
        db.begin().unwrap();
        db.set("c", "10").unwrap();
        db.begin().unwrap();
        db.unset("a").unwrap();

        assert_eq!(db.num_equal_to("10").unwrap(), 2);
        db.commit().unwrap();
        assert_eq!(db.num_equal_to("10").unwrap(), 2);
        assert_eq!(db.get("a").unwrap(), None);
    }
}

#[test]
fn test_deep_nesting() {
    let db = Database::new();
    for i in 0..100 {
        db.begin().unwrap();
        db.set("depth", &i.to_string()).unwrap();
    }
    assert_eq!(db.depth(), 100);
    assert_eq!(db.get("depth").unwrap().as_deref(), Some("99"));

    for _ in 0..50 {
        db.rollback().unwrap();
    }
    assert_eq!(db.get("depth").unwrap().as_deref(), Some("49"));

    db.commit().unwrap();
    assert_eq!(db.get("depth").unwrap().as_deref(), Some("49"));
    assert_eq!(db.metrics().commits, 1);
    assert_eq!(db.metrics().rollbacks, 50);
}

#[test]
fn test_session_scenario() {
    let db = seeded_database();
    assert_eq!(db.num_equal_to("10").unwrap(), 1);

    db.begin().unwrap();
    db.set("a", "30").unwrap();
    assert_eq!(db.get("a").unwrap().as_deref(), Some("30"));

    db.rollback().unwrap();
    assert_eq!(db.get("a").unwrap().as_deref(), Some("10"));
    assert_eq!(db.commit(), Err(Error::NoTransaction));
}
