use crate::common::hash::{hash, HashKeyType, HashMethod};
use crate::common::DEFAULT_CAPACITY;
use crate::container::hash::hash_table::HashTable;
use crate::container::hash::ProbeOutcome;

/// Slot state is carried by the tag alone; a stored key is never compared
/// against a sentinel value to decide liveness.
#[derive(Clone)]
pub enum Slot<K> {
    Empty,
    Tombstone,
    Occupied(K),
}

pub struct OpenAddressingHashTable<K: HashKeyType> {
    capacity: usize,
    size: usize,
    slots: Vec<Slot<K>>,
    method: HashMethod,
    hash_fn: fn(&K) -> u64,
}

impl<K: HashKeyType> OpenAddressingHashTable<K> {
    pub fn new(method: HashMethod) -> OpenAddressingHashTable<K> {
        OpenAddressingHashTable::with_capacity(DEFAULT_CAPACITY, method, hash)
    }

    pub fn with_capacity(
        capacity: usize,
        method: HashMethod,
        hash_fn: fn(&K) -> u64,
    ) -> OpenAddressingHashTable<K> {
        assert!(capacity > 0, "capacity must be positive");
        OpenAddressingHashTable {
            capacity,
            size: 0,
            slots: vec![Slot::Empty; capacity],
            method,
            hash_fn,
        }
    }

    fn home_slot(&self, key: &K) -> usize {
        self.method.slot_of((self.hash_fn)(key), self.capacity)
    }

    /// Probes for the slot an insert of `key` must land in. Slots held by
    /// other keys are stepped over; a tombstone takes the key the same as
    /// an empty slot does.
    fn find_insert_slot(&self, key: &K) -> ProbeOutcome {
        let home = self.home_slot(key);
        let mut current = home;

        loop {
            match &self.slots[current] {
                Slot::Occupied(occupant) => {
                    if occupant == key {
                        return ProbeOutcome::Matched(current);
                    }
                }
                _ => return ProbeOutcome::Vacant(current),
            }

            current = (current + 1) % self.capacity;
            if current == home {
                return ProbeOutcome::Saturated;
            }
        }
    }

    /// Probes for a live occurrence of `key`. A tombstone may have pushed
    /// the key further down the sequence when it was still occupied, so
    /// only an empty slot (or a full cycle) proves absence.
    fn find_occupied_slot(&self, key: &K) -> Option<usize> {
        let home = self.home_slot(key);
        let mut current = home;

        loop {
            match &self.slots[current] {
                Slot::Empty => return None,
                Slot::Occupied(occupant) if occupant == key => return Some(current),
                _ => {}
            }

            current = (current + 1) % self.capacity;
            if current == home {
                return None;
            }
        }
    }
}

impl<K: HashKeyType> HashTable<K> for OpenAddressingHashTable<K> {
    /// open addressing insert:
    /// 1. home slot = method(hash(key))
    /// 2. step over slots held by other keys, wrapping at capacity;
    ///    a full cycle drops the key without error
    /// 3. an equal occupant is overwritten in place, size untouched
    /// 4. otherwise store into the empty or tombstoned slot found
    fn insert(&mut self, key: K) {
        match self.find_insert_slot(&key) {
            ProbeOutcome::Matched(slot) => {
                self.slots[slot] = Slot::Occupied(key);
            }
            ProbeOutcome::Vacant(slot) => {
                self.slots[slot] = Slot::Occupied(key);
                self.size += 1;
            }
            ProbeOutcome::Saturated => {}
        }
    }

    fn remove(&mut self, key: &K) -> bool {
        match self.find_occupied_slot(key) {
            Some(slot) => {
                self.slots[slot] = Slot::Tombstone;
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.find_occupied_slot(key).is_some()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
