use crate::common::hash::HashKeyType;

pub trait HashTable<K: HashKeyType> {
    fn insert(&mut self, key: K);

    fn remove(&mut self, key: &K) -> bool;

    fn contains(&self, key: &K) -> bool;

    fn size(&self) -> usize;

    fn capacity(&self) -> usize;
}
