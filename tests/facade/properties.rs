//! Property tests: the facade behaves like a simple model.
//!
//! The model keeps a full copy of the map per transaction level, the
//! obvious (and expensive) way to implement nested transactions.

use crate::*;
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Set(u8, u8),
    Unset(u8),
    Begin,
    Rollback,
    Commit,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..10, 0u8..4).prop_map(|(k, v)| Op::Set(k, v)),
        2 => (0u8..10).prop_map(Op::Unset),
        1 => Just(Op::Begin),
        1 => Just(Op::Rollback),
        1 => Just(Op::Commit),
    ]
}

/// Copy-per-level reference model
struct Model {
    levels: Vec<HashMap<String, String>>,
}

impl Model {
    fn new() -> Self {
        Self {
            levels: vec![HashMap::new()],
        }
    }

    fn current(&mut self) -> &mut HashMap<String, String> {
        self.levels.last_mut().unwrap()
    }

    fn apply(&mut self, op: &Op) -> bool {
        match op {
            Op::Set(k, v) => {
                self.current().insert(format!("k{}", k), format!("v{}", v));
                true
            }
            Op::Unset(k) => {
                self.current().remove(&format!("k{}", k));
                true
            }
            Op::Begin => {
                let copy = self.levels.last().unwrap().clone();
                self.levels.push(copy);
                true
            }
            Op::Rollback => {
                if self.levels.len() == 1 {
                    return false;
                }
                self.levels.pop();
                true
            }
            Op::Commit => {
                if self.levels.len() == 1 {
                    return false;
                }
                let top = self.levels.pop().unwrap();
                self.levels = vec![top];
                true
            }
        }
    }
}

fn apply_db(db: &Database, op: &Op) -> bool {
    match op {
        Op::Set(k, v) => db.set(&format!("k{}", k), &format!("v{}", v)).is_ok(),
        Op::Unset(k) => db.unset(&format!("k{}", k)).is_ok(),
        Op::Begin => db.begin().is_ok(),
        Op::Rollback => db.rollback().is_ok(),
        Op::Commit => db.commit().is_ok(),
    }
}

proptest! {
    #[test]
    fn prop_database_matches_model(ops in proptest::collection::vec(op_strategy(), 0..100)) {
        for db in all_databases() {
            let mut model = Model::new();
            for op in &ops {
                prop_assert_eq!(apply_db(&db, op), model.apply(op));
            }

            prop_assert_eq!(db.depth(), model.levels.len() - 1);
            let expected = model.levels.last().unwrap();
            for k in 0u8..10 {
                let key = format!("k{}", k);
                prop_assert_eq!(db.get(&key).unwrap(), expected.get(&key).cloned());
            }
            for v in 0u8..4 {
                let value = format!("v{}", v);
                let count = expected.values().filter(|x| **x == value).count();
                prop_assert_eq!(db.num_equal_to(&value).unwrap(), count);
            }
        }
    }
}
