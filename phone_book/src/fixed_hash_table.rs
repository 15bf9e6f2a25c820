use log::{debug, trace, warn};

use crate::error::{PhoneBookError, Result};
use crate::probe::{ProbeSequence, ProbeStrategy};

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Empty,
    Occupied(u64),
}

impl Slot {
    pub fn value(&self) -> Option<u64> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(value) => Some(*value),
        }
    }
}

/// Where a key ended up and how many slots were examined to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionReport {
    pub key: u64,
    pub slot_index: usize,
    pub home_index: usize,
    /// Slots examined, the successful one included.
    pub comparisons: usize,
}

impl InsertionReport {
    pub fn collided(&self) -> bool {
        self.comparisons > 1
    }
}

/// Open-addressing table with a capacity fixed at construction.
///
/// Telephone numbers are stored as their own keys. Slots go from `Empty` to
/// `Occupied` exactly once; there is no removal and no growth.
#[derive(Debug, Clone)]
pub struct FixedHashTable<P = ProbeStrategy> {
    table: Vec<Slot>,
    probe: P,
    count: usize,
    total_comparisons: usize,
    reject_duplicates: bool,
}

impl<P: ProbeSequence> FixedHashTable<P> {
    pub fn new(probe: P) -> Self {
        Self {
            table: vec![Slot::Empty; DEFAULT_CAPACITY],
            probe,
            count: 0,
            total_comparisons: 0,
            reject_duplicates: false,
        }
    }

    pub fn with_capacity(capacity: usize, probe: P) -> Result<Self> {
        if capacity == 0 {
            return Err(PhoneBookError::ZeroCapacity);
        }
        Ok(Self {
            table: vec![Slot::Empty; capacity],
            probe,
            count: 0,
            total_comparisons: 0,
            reject_duplicates: false,
        })
    }

    /// Refuse keys that are already stored instead of placing them in another slot.
    pub fn reject_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn size(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Comparisons summed over every successful insertion.
    pub fn total_comparisons(&self) -> usize {
        self.total_comparisons
    }

    /// Stores `key` in the first empty slot of its probe sequence.
    ///
    /// At most `capacity` slots are examined. On error the table is left untouched.
    pub fn insert(&mut self, key: u64) -> Result<InsertionReport> {
        let capacity = self.capacity();
        if self.is_full() {
            warn!("Rejecting {}: table is full ({} slots)", key, capacity);
            return Err(PhoneBookError::CapacityExceeded { key, capacity });
        }

        if self.reject_duplicates {
            if let Some(slot) = self.table.iter().position(|s| *s == Slot::Occupied(key)) {
                warn!("Rejecting duplicate {} stored at index {}", key, slot);
                return Err(PhoneBookError::DuplicateKey { key, slot });
            }
        }

        let home_index = self.probe.next(key, 0, capacity);
        let mut comparisons = 0;
        for attempt in 0..capacity {
            let index = self.probe.next(key, attempt, capacity);
            comparisons += 1;
            trace!("{}: probe {} examines index {}", self.probe.name(), attempt, index);

            if self.table[index] == Slot::Empty {
                self.table[index] = Slot::Occupied(key);
                self.count += 1;
                self.total_comparisons += comparisons;
                debug!(
                    "{}: {} stored at index {} (home {}) after {} comparisons",
                    self.probe.name(),
                    key,
                    index,
                    home_index,
                    comparisons
                );
                return Ok(InsertionReport {
                    key,
                    slot_index: index,
                    home_index,
                    comparisons,
                });
            }
        }

        warn!(
            "{}: no empty slot reachable for {} after {} probes ({} of {} slots used)",
            self.probe.name(),
            key,
            capacity,
            self.count,
            capacity
        );
        Err(PhoneBookError::ProbeExhausted {
            key,
            attempts: capacity,
        })
    }

    pub fn slots(&self) -> &[Slot] {
        &self.table
    }

    pub fn snapshot(&self) -> Vec<Option<u64>> {
        self.table.iter().map(Slot::value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Linear, Quadratic};
    use proptest::proptest;
    use std::collections::HashSet;

    fn occupied(table: &FixedHashTable<impl ProbeSequence>) -> Vec<(usize, u64)> {
        table
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.value().map(|v| (i, v)))
            .collect()
    }

    #[test]
    fn test_linear_collisions() {
        let mut table = FixedHashTable::new(Linear);

        let reports: Vec<InsertionReport> = [12, 22, 32]
            .iter()
            .map(|&key| table.insert(key).unwrap())
            .collect();

        let placed: Vec<(usize, usize)> = reports.iter().map(|r| (r.slot_index, r.comparisons)).collect();
        assert_eq!(placed, vec![(2, 1), (3, 2), (4, 3)]);
        assert!(reports.iter().all(|r| r.home_index == 2));
        assert!(!reports[0].collided());
        assert!(reports[2].collided());
        assert_eq!(occupied(&table), vec![(2, 12), (3, 22), (4, 32)]);
        assert_eq!(table.total_comparisons(), 6);
        assert_eq!(table.size(), 3);
    }

    #[test]
    fn test_quadratic_collisions() {
        let mut table = FixedHashTable::new(Quadratic);

        let placed: Vec<(usize, usize)> = [12, 22, 32]
            .iter()
            .map(|&key| table.insert(key).unwrap())
            .map(|r| (r.slot_index, r.comparisons))
            .collect();

        assert_eq!(placed, vec![(2, 1), (3, 2), (6, 3)]);
        assert_eq!(occupied(&table), vec![(2, 12), (3, 22), (6, 32)]);
        assert_eq!(table.total_comparisons(), 6);
    }

    #[test]
    fn test_linear_fill_with_one_home_slot() {
        let mut table = FixedHashTable::new(Linear);
        for i in 0..10u64 {
            let report = table.insert(7 + 10 * i).unwrap();
            assert_eq!(report.comparisons, i as usize + 1);
        }
        assert!(table.is_full());
        assert_eq!(table.total_comparisons(), (1..=10).sum::<usize>());
        assert!(table.slots().iter().all(|s| *s != Slot::Empty));
    }

    #[test]
    fn test_full_table_rejects_insert() {
        let mut table = FixedHashTable::with_capacity(3, ProbeStrategy::Linear).unwrap();
        for key in [1, 2, 3] {
            table.insert(key).unwrap();
        }
        let before = table.snapshot();

        match table.insert(4) {
            Err(PhoneBookError::CapacityExceeded { key, capacity }) => {
                assert_eq!(key, 4);
                assert_eq!(capacity, 3);
            }
            other => panic!("expected CapacityExceeded, got {:?}", other),
        }
        assert_eq!(table.snapshot(), before);
        assert_eq!(table.total_comparisons(), 3);
    }

    #[test]
    fn test_quadratic_exhausts_reachable_slots() {
        let mut table = FixedHashTable::new(Quadratic);
        for key in [0, 1, 4, 5, 6, 9] {
            assert_eq!(table.insert(key).unwrap().comparisons, 1);
        }
        let before = table.snapshot();

        match table.insert(10) {
            Err(PhoneBookError::ProbeExhausted { key, attempts }) => {
                assert_eq!(key, 10);
                assert_eq!(attempts, 10);
            }
            other => panic!("expected ProbeExhausted, got {:?}", other),
        }
        assert!(!table.is_full());
        assert_eq!(table.snapshot(), before);
        assert_eq!(table.total_comparisons(), 6);
    }

    #[test]
    fn test_duplicates() {
        let mut table = FixedHashTable::new(Linear);
        table.insert(55).unwrap();
        let report = table.insert(55).unwrap();
        assert_eq!(report.slot_index, 6);

        let mut strict = FixedHashTable::new(Linear).reject_duplicates(true);
        strict.insert(55).unwrap();
        match strict.insert(55) {
            Err(PhoneBookError::DuplicateKey { key, slot }) => assert_eq!((key, slot), (55, 5)),
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
        assert_eq!(strict.size(), 1);
    }

    #[test]
    fn test_zero_capacity() {
        assert!(matches!(
            FixedHashTable::with_capacity(0, Linear),
            Err(PhoneBookError::ZeroCapacity)
        ));
    }

    #[test]
    fn test_snapshot() {
        let mut table = FixedHashTable::with_capacity(4, Linear).unwrap();
        table.insert(1).unwrap();
        table.insert(6).unwrap();
        assert_eq!(table.snapshot(), vec![None, Some(1), Some(6), None]);
        assert_eq!(table.load_factor(), 0.5);
    }

    proptest! {
        #[test]
        fn test_linear_distinct_keys_fit(keys in proptest::collection::hash_set(0u64..10_000, 1..40)) {
            let capacity = keys.len() + 3;
            let mut table = FixedHashTable::with_capacity(capacity, Linear).unwrap();

            for &key in keys.iter() {
                let report = table.insert(key).unwrap();
                assert!(report.comparisons <= capacity);
            }
            assert_eq!(table.size(), keys.len());
        }

        #[test]
        fn test_reports_rebuild_snapshot(keys in proptest::collection::vec(0u64..1_000, 1..30), quadratic in proptest::bool::ANY) {
            let strategy = if quadratic { ProbeStrategy::Quadratic } else { ProbeStrategy::Linear };
            let mut table = FixedHashTable::with_capacity(31, strategy).unwrap();
            let mut rebuilt = vec![None; 31];

            for &key in keys.iter() {
                if let Ok(report) = table.insert(key) {
                    assert!(rebuilt[report.slot_index].is_none());
                    rebuilt[report.slot_index] = Some(report.key);
                }
            }
            assert_eq!(table.snapshot(), rebuilt);
        }

        #[test]
        fn test_overfilled_table_always_terminates(keys in proptest::collection::vec(0u64..100, 1..40), capacity in 1usize..16) {
            let mut table = FixedHashTable::with_capacity(capacity, Quadratic).unwrap();
            let mut seen = HashSet::new();

            for &key in keys.iter() {
                let was_full = table.is_full();
                match table.insert(key) {
                    Ok(report) => {
                        assert!(report.comparisons <= capacity);
                        assert!(seen.insert(report.slot_index));
                    }
                    Err(PhoneBookError::CapacityExceeded { .. }) => assert!(was_full),
                    Err(PhoneBookError::ProbeExhausted { .. }) => assert!(!was_full),
                    Err(e) => panic!("unexpected error {}", e),
                }
            }
            assert_eq!(seen.len(), table.size());
        }
    }
}
