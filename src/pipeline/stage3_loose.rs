use crate::model::record::Table;
use crate::model::scoring::{MatchMode, score_table};
use crate::model::tally::CategoryTally;
use crate::pipeline::stage2_strict::log_tally;

/// CompletelyCorrect and PartiallyCorrect verdicts satisfy each other;
/// Incorrect and Irrelevant still need an exact verdict.
pub fn run_stage3(table: &Table) -> CategoryTally {
    let tally = score_table(table, MatchMode::Loose);
    log_tally(MatchMode::Loose, &tally);
    tally
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_loose.rs"]
mod tests;
