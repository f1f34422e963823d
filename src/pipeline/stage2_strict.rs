use tracing::info;

use crate::model::record::Table;
use crate::model::scoring::{MatchMode, score_table};
use crate::model::tally::CategoryTally;

pub fn run_stage2(table: &Table) -> CategoryTally {
    let tally = score_table(table, MatchMode::Strict);
    log_tally(MatchMode::Strict, &tally);
    tally
}

pub fn log_tally(mode: MatchMode, tally: &CategoryTally) {
    for entry in &tally.entries {
        info!(
            "{} accuracy {}: {}/{} ({:.1}%)",
            mode.label(),
            entry.category,
            entry.matched,
            entry.total,
            entry.ratio * 100.0
        );
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_strict.rs"]
mod tests;
