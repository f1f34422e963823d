use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use crate::model::category::{Category, sorted_categories};
use crate::model::confusion::ConfusionMatrix;
use crate::model::record::{RUN_COUNT, Table};

/// Long-form view of the run columns: one (expected, observed label) pair per
/// record and run.
pub fn melt_runs(table: &Table) -> Vec<(Category, &str)> {
    let mut out = Vec::with_capacity(table.records().len() * RUN_COUNT);
    for record in table.records() {
        for run in &record.runs {
            out.push((record.expected, run.label()));
        }
    }
    out
}

pub fn run_stage4(table: &Table) -> ConfusionMatrix {
    let pairs = melt_runs(table);

    let mut columns: BTreeSet<String> = Category::ALL
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    let mut cells: HashMap<(Category, &str), u64> = HashMap::new();
    for &(expected, observed) in &pairs {
        columns.insert(observed.to_string());
        *cells.entry((expected, observed)).or_insert(0) += 1;
    }

    let rows = sorted_categories();
    let columns: Vec<String> = columns.into_iter().collect();
    let counts: Vec<Vec<u64>> = rows
        .iter()
        .map(|&row| {
            columns
                .iter()
                .map(|col| cells.get(&(row, col.as_str())).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    let matrix = ConfusionMatrix {
        rows,
        columns,
        counts,
    };
    info!(
        "response distribution: {} observations across {} observed labels",
        pairs.len(),
        matrix.columns.len()
    );
    for &row in &matrix.rows {
        debug!("expected {}: {} observations", row, matrix.row_sum(row));
    }
    matrix
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_distribution.rs"]
mod tests;
