use std::fmt;

use crate::hash_function::hash;

/// Produces the candidate slot for the `attempt`-th probe of `key`.
///
/// Attempt 0 is always the home slot. Every sequence is periodic in `capacity`:
/// attempt `i + capacity` lands on the same slot as attempt `i`, so callers never
/// need more than `capacity` attempts to see every slot a sequence can reach.
pub trait ProbeSequence {
    fn next(&self, key: u64, attempt: usize, capacity: usize) -> usize;

    fn name(&self) -> &'static str;
}

/// `(hash(key) + attempt) mod capacity`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Linear;

/// `(hash(key) + attempt^2) mod capacity`
///
/// Only reaches every slot for some capacities. With capacity 10 the offsets
/// `i^2 mod 10` are {0, 1, 4, 5, 6, 9}, so four slots are never visited from a
/// given home slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Quadratic;

fn wrap(home: usize, step: u128, capacity: usize) -> usize {
    ((home as u128 + step) % capacity as u128) as usize
}

impl ProbeSequence for Linear {
    fn next(&self, key: u64, attempt: usize, capacity: usize) -> usize {
        let step = (attempt % capacity) as u128;
        wrap(hash(key, capacity), step, capacity)
    }

    fn name(&self) -> &'static str {
        "Linear Probing"
    }
}

impl ProbeSequence for Quadratic {
    fn next(&self, key: u64, attempt: usize, capacity: usize) -> usize {
        // (i mod c)^2 == i^2 (mod c), keeps the square within u128
        let reduced = (attempt % capacity) as u128;
        wrap(hash(key, capacity), reduced * reduced, capacity)
    }

    fn name(&self) -> &'static str {
        "Quadratic Probing"
    }
}

/// Runtime choice between the probing variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeStrategy {
    Linear,
    Quadratic,
}

impl ProbeStrategy {
    pub const ALL: [ProbeStrategy; 2] = [ProbeStrategy::Linear, ProbeStrategy::Quadratic];
}

impl ProbeSequence for ProbeStrategy {
    fn next(&self, key: u64, attempt: usize, capacity: usize) -> usize {
        match self {
            ProbeStrategy::Linear => Linear.next(key, attempt, capacity),
            ProbeStrategy::Quadratic => Quadratic.next(key, attempt, capacity),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ProbeStrategy::Linear => Linear.name(),
            ProbeStrategy::Quadratic => Quadratic.name(),
        }
    }
}

impl fmt::Display for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
