use fasthash::XXHasher;
use std::hash::{Hash, Hasher};
use crate::common::KeyType;

pub trait HashKeyType: KeyType + Hash {}
impl<T: KeyType + Hash> HashKeyType for T {}

pub fn hash<K: HashKeyType>(key: &K) -> u64 {
    let mut hasher: XXHasher = Default::default();
    key.hash(&mut hasher);
    hasher.finish()
}

const MULTIPLICATION_A: f64 = 0.6180339887;
const ALGEBRAIC_A: u64 = 31;
const ALGEBRAIC_B: u64 = 17;

/// Strategy for spreading a 64-bit digest over the slot range.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum HashMethod {
    Modulo,
    Multiplication,
    Algebraic,
}

impl HashMethod {
    /// Maps a digest to a slot index in `[0, capacity)`.
    pub fn slot_of(self, digest: u64, capacity: usize) -> usize {
        match self {
            HashMethod::Modulo => modulo_slot(digest, capacity),
            HashMethod::Multiplication => multiplication_slot(digest, capacity),
            HashMethod::Algebraic => algebraic_slot(digest, capacity),
        }
    }
}

fn modulo_slot(digest: u64, capacity: usize) -> usize {
    (digest % capacity as u64) as usize
}

// All arithmetic stays in f64: once digest * A reaches 2^53 the product
// carries no fractional bits and the slot degenerates to 0, matching the
// reference doubles bit-for-bit.
fn multiplication_slot(digest: u64, capacity: usize) -> usize {
    let temp = digest as f64 * MULTIPLICATION_A;
    let frac = temp - temp.floor();
    (capacity as f64 * frac) as usize
}

// Wrapping u64 arithmetic cannot produce a negative residue, so the
// reference's `(x % capacity + capacity) % capacity` reduces to one modulo.
fn algebraic_slot(digest: u64, capacity: usize) -> usize {
    (ALGEBRAIC_A.wrapping_mul(digest).wrapping_add(ALGEBRAIC_B) % capacity as u64) as usize
}
