use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hashlab::common::hash::HashMethod;
use hashlab::container::hash::hash_table::HashTable;
use hashlab::container::hash::open_addressing_hash_table::OpenAddressingHashTable;
use hashlab::container::hash::separate_chaining_hash_table::SeparateChainingHashTable;

const METHODS: [HashMethod; 3] = [
    HashMethod::Modulo,
    HashMethod::Multiplication,
    HashMethod::Algebraic,
];

fn distinct_keys(count: usize, seed: u64) -> HashSet<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys = HashSet::new();
    while keys.len() < count {
        keys.insert(rng.gen::<u64>());
    }
    keys
}

#[test]
fn should_hold_fifty_thousand_distinct_keys_at_half_fill() {
    let mut table = OpenAddressingHashTable::new(HashMethod::Modulo);
    let keys = distinct_keys(50000, 42);

    for key in &keys {
        table.insert(*key);
    }
    assert_eq!(table.size(), 50000);

    // a key outside the inserted set misses without disturbing the table
    let mut absent = 0;
    while keys.contains(&absent) {
        absent += 1;
    }
    assert!(!table.remove(&absent));
    assert_eq!(table.size(), 50000);
}

#[test]
fn should_round_trip_keys_under_every_method() {
    for &method in METHODS.iter() {
        let mut open = OpenAddressingHashTable::new(method);
        let mut chained = SeparateChainingHashTable::new(method);

        for key in [3u64, 77, 500000, u64::MAX].iter() {
            let size_before = open.size();
            open.insert(*key);
            assert!(open.remove(key));
            assert_eq!(open.size(), size_before);

            let size_before = chained.size();
            chained.insert(*key);
            assert!(chained.remove(key));
            assert_eq!(chained.size(), size_before);
        }
    }
}

#[test]
fn should_never_duplicate_a_key_across_repeated_inserts() {
    for &method in METHODS.iter() {
        let mut open = OpenAddressingHashTable::new(method);
        let mut chained = SeparateChainingHashTable::new(method);

        for _ in 0..5 {
            open.insert(12345u64);
            chained.insert(12345u64);
        }

        assert_eq!(open.size(), 1);
        assert_eq!(chained.size(), 1);
        assert!(open.remove(&12345));
        assert!(!open.remove(&12345));
        assert!(chained.remove(&12345));
        assert!(!chained.remove(&12345));
    }
}

#[test]
fn should_keep_colliding_key_reachable_past_tombstone() {
    // low-digit hash forces 3 and 13 onto one home slot
    let mut table =
        OpenAddressingHashTable::with_capacity(10, HashMethod::Modulo, |key: &u64| *key % 10);

    table.insert(3);
    assert!(table.remove(&3));
    table.insert(13); // lands on the tombstone left by 3

    assert!(!table.remove(&3));
    assert!(table.contains(&13));
    assert_eq!(table.size(), 1);
}

#[test]
fn should_update_and_preserve_chain_order_under_collisions() {
    let mut table =
        SeparateChainingHashTable::with_capacity(100, HashMethod::Modulo, |key: &u64| *key);

    table.insert(5);
    table.insert(105);
    table.insert(5);

    assert_eq!(table.size(), 2);
    assert!(table.contains(&5));
    assert!(table.contains(&105));
    assert!(table.remove(&5));
    assert!(table.contains(&105));
    assert!(table.remove(&105));
    assert_eq!(table.size(), 0);
}

#[test]
fn should_fill_chaining_table_past_its_capacity() {
    let mut table =
        SeparateChainingHashTable::with_capacity(64, HashMethod::Multiplication, |key: &u64| *key);

    for key in 0..1000u64 {
        table.insert(key);
    }

    assert_eq!(table.size(), 1000);
    for key in 0..1000u64 {
        assert!(table.contains(&key));
    }
}

#[test]
fn should_agree_between_variants_under_one_op_sequence() {
    for &method in METHODS.iter() {
        let mut open = OpenAddressingHashTable::new(method);
        let mut chained = SeparateChainingHashTable::new(method);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20000 {
            let key = rng.gen_range(0..2000u64);
            if rng.gen_bool(0.6) {
                open.insert(key);
                chained.insert(key);
            } else {
                assert_eq!(open.remove(&key), chained.remove(&key));
            }
            assert_eq!(open.size(), chained.size());
        }

        for key in 0..2000u64 {
            assert_eq!(open.contains(&key), chained.contains(&key));
        }
    }
}
