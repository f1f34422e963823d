use super::*;

#[path = "fixtures.rs"]
mod fixtures;

use crate::model::category::Category;
use fixtures::{mixed_table, ratio, record, table};

#[test]
fn test_strict_single_record() {
    let t = table(vec![record(
        Category::CompletelyCorrect,
        [
            "CompletelyCorrect",
            "CompletelyCorrect",
            "PartiallyCorrect",
            "Incorrect",
            "Incorrect",
        ],
    )]);
    let tally = run_stage2(&t);
    assert!((ratio(&tally, Category::CompletelyCorrect) - 0.4).abs() < 1e-12);
    assert_eq!(ratio(&tally, Category::Irrelevant), 0.0);
    assert_eq!(ratio(&tally, Category::PartiallyCorrect), 0.0);
}

#[test]
fn test_strict_covers_every_category_in_name_order() {
    let tally = run_stage2(&table(Vec::new()));
    let names: Vec<&str> = tally.entries.iter().map(|e| e.category.name()).collect();
    assert_eq!(
        names,
        vec![
            "CompletelyCorrect",
            "Incorrect",
            "Irrelevant",
            "PartiallyCorrect"
        ]
    );
    for entry in &tally.entries {
        assert_eq!(entry.ratio, 0.0);
        assert_eq!(entry.total, 0);
    }
}

#[test]
fn test_strict_counts_missing_in_denominator() {
    let tally = run_stage2(&mixed_table());
    let incorrect = tally
        .entries
        .iter()
        .find(|e| e.category == Category::Incorrect)
        .unwrap();
    // two Incorrect records, one missing run and one out-of-set verdict
    assert_eq!(incorrect.total, 10);
    assert_eq!(incorrect.matched, 6);
    assert!((incorrect.ratio - 0.6).abs() < 1e-12);

    let pc = ratio(&tally, Category::PartiallyCorrect);
    assert!((pc - 0.4).abs() < 1e-12);
}

#[test]
fn test_strict_ratios_in_unit_interval() {
    let tally = run_stage2(&mixed_table());
    for entry in &tally.entries {
        assert!((0.0..=1.0).contains(&entry.ratio));
        assert!(entry.matched <= entry.total);
    }
}
