use super::*;

#[path = "fixtures.rs"]
mod fixtures;

use crate::model::category::UNKNOWN_LABEL;
use fixtures::{mixed_table, record, table};

fn cell(matrix: &ConfusionMatrix, row: Category, column: &str) -> u64 {
    let r = matrix.rows.iter().position(|&c| c == row).unwrap();
    let c = matrix.columns.iter().position(|name| name == column).unwrap();
    matrix.counts[r][c]
}

#[test]
fn test_melt_produces_five_pairs_per_record() {
    let t = mixed_table();
    let pairs = melt_runs(&t);
    assert_eq!(pairs.len(), t.records().len() * RUN_COUNT);
    assert_eq!(pairs[0], (Category::CompletelyCorrect, "CompletelyCorrect"));
}

#[test]
fn test_rows_always_all_categories() {
    let matrix = run_stage4(&table(Vec::new()));
    assert_eq!(matrix.rows, sorted_categories());
    assert_eq!(
        matrix.columns,
        vec![
            "CompletelyCorrect",
            "Incorrect",
            "Irrelevant",
            "PartiallyCorrect"
        ]
    );
    assert_eq!(matrix.max_count(), 0);
}

#[test]
fn test_columns_include_observed_and_unknown() {
    let matrix = run_stage4(&mixed_table());
    assert_eq!(
        matrix.columns,
        vec![
            "CompletelyCorrect",
            "Incorrect",
            "Irrelevant",
            "PartiallyCorrect",
            "Timeout",
            UNKNOWN_LABEL
        ]
    );
    assert_eq!(matrix.counts.len(), 4);
    assert!(matrix.counts.iter().all(|row| row.len() == 6));
}

#[test]
fn test_row_sums_are_five_per_record() {
    let t = mixed_table();
    let matrix = run_stage4(&t);
    for category in Category::ALL {
        let n = t.with_expected(category).count() as u64;
        assert_eq!(matrix.row_sum(category), n * RUN_COUNT as u64);
    }
}

#[test]
fn test_missing_run_counts_as_unknown() {
    let t = table(vec![record(
        Category::Irrelevant,
        ["Irrelevant", "", "Irrelevant", "Irrelevant", "Irrelevant"],
    )]);
    let matrix = run_stage4(&t);
    assert_eq!(cell(&matrix, Category::Irrelevant, UNKNOWN_LABEL), 1);
    assert_eq!(cell(&matrix, Category::Irrelevant, "Irrelevant"), 4);
    assert_eq!(cell(&matrix, Category::Incorrect, UNKNOWN_LABEL), 0);
}

#[test]
fn test_cross_counts() {
    let matrix = run_stage4(&mixed_table());
    assert_eq!(cell(&matrix, Category::Incorrect, "Incorrect"), 6);
    assert_eq!(cell(&matrix, Category::Incorrect, "Timeout"), 1);
    assert_eq!(cell(&matrix, Category::Incorrect, "PartiallyCorrect"), 1);
    assert_eq!(cell(&matrix, Category::CompletelyCorrect, "Incorrect"), 2);
    assert_eq!(cell(&matrix, Category::Irrelevant, "CompletelyCorrect"), 1);
    assert_eq!(cell(&matrix, Category::PartiallyCorrect, "Timeout"), 0);
}
