//! Sharing one handle across threads.

use crate::*;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_writers_all_land() {
    let db = Database::new();
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let db = db.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..100 {
                    db.set(&format!("t{}_{}", t, i), "x").unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(db.num_equal_to("x").unwrap(), 800);
}

#[test]
fn test_handles_share_one_session() {
    let db = Database::new();
    let other = db.clone();

    db.begin().unwrap();
    other.set("k", "v").unwrap();
    assert!(other.in_transaction());

    db.rollback().unwrap();
    assert_eq!(other.get("k").unwrap(), None);
}
