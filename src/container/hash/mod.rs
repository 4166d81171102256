use crate::container::hash::ProbeOutcome::{Matched, Vacant};

pub mod hash_table;
pub mod open_addressing_hash_table;
pub mod separate_chaining_hash_table;

/// Where a bounded linear probe ended up.
pub enum ProbeOutcome {
    /// An empty or tombstoned slot that can take the key.
    Vacant(usize),

    /// A slot already occupied by an equal key.
    Matched(usize),

    /// The probe cycled back to its start slot without finding either.
    Saturated,
}

impl ProbeOutcome {
    pub fn vacant(&self) -> bool {
        matches!(self, ProbeOutcome::Vacant(_))
    }

    pub fn matched(&self) -> bool {
        matches!(self, ProbeOutcome::Matched(_))
    }

    pub fn saturated(&self) -> bool {
        matches!(self, ProbeOutcome::Saturated)
    }

    pub fn unwrap(self) -> usize {
        match self {
            Vacant(slot) | Matched(slot) => slot,
            _ => panic!("ProbeOutcome cannot get available slot"),
        }
    }
}
