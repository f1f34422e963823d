use crate::model::category::{Category, sorted_categories};
use crate::model::record::{Observation, Table};
use crate::model::tally::{CategoryTally, TallyEntry, safe_ratio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Strict,
    Loose,
}

impl MatchMode {
    pub fn matches(self, expected: Category, observed: &Observation) -> bool {
        let Some(actual) = observed.category() else {
            return false;
        };
        match self {
            MatchMode::Strict => actual == expected,
            MatchMode::Loose => {
                if expected.is_correct_ish() {
                    actual.is_correct_ish()
                } else {
                    actual == expected
                }
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchMode::Strict => "strict",
            MatchMode::Loose => "loose",
        }
    }
}

/// Ratio of matching run verdicts per expected category. Every run column of
/// every record counts toward the denominator, missing verdicts included.
pub fn score_table(table: &Table, mode: MatchMode) -> CategoryTally {
    let mut entries = Vec::with_capacity(Category::ALL.len());
    for category in sorted_categories() {
        let mut matched = 0u64;
        let mut total = 0u64;
        for record in table.with_expected(category) {
            for run in &record.runs {
                total += 1;
                if mode.matches(category, run) {
                    matched += 1;
                }
            }
        }
        entries.push(TallyEntry {
            category,
            matched,
            total,
            ratio: safe_ratio(matched, total),
        });
    }
    CategoryTally { entries }
}
