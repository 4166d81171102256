use crate::common::hash::{hash, HashKeyType, HashMethod};
use crate::common::DEFAULT_CAPACITY;
use crate::container::hash::hash_table::HashTable;

pub struct SeparateChainingHashTable<K: HashKeyType> {
    capacity: usize,
    size: usize,
    buckets: Vec<Vec<K>>,
    method: HashMethod,
    hash_fn: fn(&K) -> u64,
}

impl<K: HashKeyType> SeparateChainingHashTable<K> {
    pub fn new(method: HashMethod) -> SeparateChainingHashTable<K> {
        SeparateChainingHashTable::with_capacity(DEFAULT_CAPACITY, method, hash)
    }

    pub fn with_capacity(
        capacity: usize,
        method: HashMethod,
        hash_fn: fn(&K) -> u64,
    ) -> SeparateChainingHashTable<K> {
        assert!(capacity > 0, "capacity must be positive");
        SeparateChainingHashTable {
            capacity,
            size: 0,
            buckets: vec![Vec::new(); capacity],
            method,
            hash_fn,
        }
    }

    fn home_bucket(&self, key: &K) -> usize {
        self.method.slot_of((self.hash_fn)(key), self.capacity)
    }
}

impl<K: HashKeyType> HashTable<K> for SeparateChainingHashTable<K> {
    /// chaining insert: an equal entry anywhere in the home bucket is
    /// overwritten in place, otherwise the key is appended, so a bucket
    /// holds at most one entry per distinct key and keeps insertion order.
    fn insert(&mut self, key: K) {
        let bucket = self.home_bucket(&key);
        match self.buckets[bucket].iter().position(|entry| *entry == key) {
            Some(pos) => {
                self.buckets[bucket][pos] = key;
            }
            None => {
                self.buckets[bucket].push(key);
                self.size += 1;
            }
        }
    }

    fn remove(&mut self, key: &K) -> bool {
        let bucket = self.home_bucket(key);
        match self.buckets[bucket].iter().position(|entry| entry == key) {
            Some(pos) => {
                self.buckets[bucket].remove(pos);
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    fn contains(&self, key: &K) -> bool {
        let bucket = self.home_bucket(key);
        self.buckets[bucket].iter().any(|entry| entry == key)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
