use std::io::{self, Write};

use crate::directory::{Insertion, StrategyRun};
use crate::fixed_hash_table::Slot;
use crate::probe::ProbeSequence;

/// Printed in place of an empty slot.
pub const EMPTY_SENTINEL: &str = "-1";

pub fn render_slots(slots: &[Slot]) -> String {
    let cells: Vec<String> = slots
        .iter()
        .map(|slot| match slot {
            Slot::Empty => EMPTY_SENTINEL.to_string(),
            Slot::Occupied(value) => value.to_string(),
        })
        .collect();
    format!("[{}]", cells.join(", "))
}

pub fn write_insertions<W: Write>(out: &mut W, run: &StrategyRun) -> io::Result<()> {
    writeln!(out, "\n--- Insertion using {} ---", run.strategy.name())?;
    for insertion in &run.insertions {
        match insertion {
            Insertion::Placed(report) => writeln!(
                out,
                "{} inserted at index {} with {} comparisons.",
                report.key, report.slot_index, report.comparisons
            )?,
            Insertion::Rejected { key, reason } => {
                writeln!(out, "{} not inserted: {}", key, reason)?
            }
        }
    }
    Ok(())
}

pub fn write_final_table<W: Write>(out: &mut W, run: &StrategyRun) -> io::Result<()> {
    let label = format!("Final Hash Table ({}):", run.strategy.name());
    writeln!(out, "{:<38}{}", label, render_slots(run.table.slots()))
}

pub fn write_summary<W: Write>(out: &mut W, runs: &[StrategyRun]) -> io::Result<()> {
    writeln!(out, "\n--- Comparison Summary ---")?;
    for run in runs {
        let label = format!("Total Comparisons ({}):", run.strategy.name());
        writeln!(out, "{:<40}{}", label, run.total_comparisons())?;
        if run.rejected() > 0 {
            writeln!(out, "  {} number(s) could not be inserted", run.rejected())?;
        }
    }
    Ok(())
}

/// Insertion details for every run, then the final tables, then the totals.
pub fn write_report<W: Write>(out: &mut W, runs: &[StrategyRun]) -> io::Result<()> {
    for run in runs {
        write_insertions(out, run)?;
    }
    writeln!(out)?;
    for run in runs {
        write_final_table(out, run)?;
    }
    write_summary(out, runs)
}
