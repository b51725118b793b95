//! Key-value operations with no transaction open.

use crate::*;

#[test]
fn test_get_after_set() {
    for db in all_databases() {
        db.set("key", "value").unwrap();
        assert_eq!(db.get("key").unwrap().as_deref(), Some("value"));
    }
}

#[test]
fn test_set_overwrites() {
    for db in all_databases() {
        db.set("key", "1").unwrap();
        db.set("key", "2").unwrap();
        assert_eq!(db.get("key").unwrap().as_deref(), Some("2"));
        assert_eq!(db.num_equal_to("1").unwrap(), 0);
    }
}

#[test]
fn test_get_never_set() {
    for db in all_databases() {
        assert_eq!(db.get("nothing").unwrap(), None);
    }
}

#[test]
fn test_unset_removes() {
    for db in all_databases() {
        db.set("key", "value").unwrap();
        db.unset("key").unwrap();
        assert_eq!(db.get("key").unwrap(), None);
        assert!(db.snapshot().is_empty());
    }
}

#[test]
fn test_unset_missing_is_noop() {
    let db = seeded_database();
    db.unset("zzz").unwrap();
    assert_eq!(db.snapshot().len(), 2);
}

#[test]
fn test_num_equal_to_exact_match() {
    let db = seeded_database();
    db.set("c", "10 ").unwrap();
    db.set("d", "010").unwrap();
    assert_eq!(db.num_equal_to("10").unwrap(), 1);
    assert_eq!(db.num_equal_to("20").unwrap(), 1);
    assert_eq!(db.num_equal_to("30").unwrap(), 0);
}

#[test]
fn test_raw_execute() {
    let db = Database::new();
    db.execute(layerkv::Command::Set {
        key: "k".into(),
        value: "v".into(),
    })
    .unwrap();
    assert_eq!(
        db.execute(layerkv::Command::Get { key: "k".into() }).unwrap(),
        layerkv::Output::Maybe(Some("v".into()))
    );
}
