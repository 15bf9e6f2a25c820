use log::{info, warn};

use crate::error::{PhoneBookError, Result};
use crate::fixed_hash_table::{FixedHashTable, InsertionReport, DEFAULT_CAPACITY};
use crate::probe::ProbeStrategy;

#[derive(Debug, Clone, Copy)]
pub struct InsertOptions {
    pub capacity: usize,
    pub reject_duplicates: bool,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            reject_duplicates: false,
        }
    }
}

/// Outcome of inserting one telephone number.
#[derive(Debug)]
pub enum Insertion {
    Placed(InsertionReport),
    Rejected { key: u64, reason: PhoneBookError },
}

/// One table filled with the session's numbers using a single strategy.
#[derive(Debug)]
pub struct StrategyRun {
    pub strategy: ProbeStrategy,
    pub table: FixedHashTable<ProbeStrategy>,
    pub insertions: Vec<Insertion>,
}

impl StrategyRun {
    pub fn reports(&self) -> impl Iterator<Item = &InsertionReport> {
        self.insertions.iter().filter_map(|insertion| match insertion {
            Insertion::Placed(report) => Some(report),
            Insertion::Rejected { .. } => None,
        })
    }

    pub fn total_comparisons(&self) -> usize {
        self.table.total_comparisons()
    }

    pub fn rejected(&self) -> usize {
        self.insertions
            .iter()
            .filter(|i| matches!(i, Insertion::Rejected { .. }))
            .count()
    }

    /// Slot contents reconstructed from the reports alone.
    pub fn rebuild_snapshot(&self) -> Vec<Option<u64>> {
        let mut slots = vec![None; self.table.capacity()];
        for report in self.reports() {
            slots[report.slot_index] = Some(report.key);
        }
        slots
    }
}

/// Inserts `keys` in order into a fresh table. A rejected key is recorded and the
/// remaining keys are still inserted.
pub fn run(strategy: ProbeStrategy, keys: &[u64], options: InsertOptions) -> Result<StrategyRun> {
    let mut table = FixedHashTable::with_capacity(options.capacity, strategy)?
        .reject_duplicates(options.reject_duplicates);

    let insertions = keys
        .iter()
        .map(|&key| match table.insert(key) {
            Ok(report) => Insertion::Placed(report),
            Err(reason) => {
                warn!("{}: {}", strategy, reason);
                Insertion::Rejected { key, reason }
            }
        })
        .collect();

    info!(
        "{}: {} of {} slots used, {} comparisons",
        strategy,
        table.size(),
        table.capacity(),
        table.total_comparisons()
    );

    Ok(StrategyRun {
        strategy,
        table,
        insertions,
    })
}

pub fn run_all(
    strategies: &[ProbeStrategy],
    keys: &[u64],
    options: InsertOptions,
) -> Result<Vec<StrategyRun>> {
    strategies
        .iter()
        .map(|&strategy| run(strategy, keys, options))
        .collect()
}
