use std::path::Path;

use tracing::{info, warn};

use crate::error::ReportError;
use crate::input::{LoadOptions, load_report};
use crate::model::category::{Category, sorted_categories};
use crate::model::record::Table;

#[derive(Debug)]
pub struct Stage1Output {
    pub table: Table,
}

pub fn run_stage1(path: &Path, options: LoadOptions) -> Result<Stage1Output, ReportError> {
    let table = load_report(path, options)?;
    let stats = table.stats();
    if stats.unrecognized_rows > 0 {
        warn!(
            "{} rows skipped: expected result is not one of {}",
            stats.unrecognized_rows,
            Category::ALL.map(|c| c.name()).join(", ")
        );
    }
    if table.records().is_empty() {
        warn!(
            "no records with a recognized expected result in {}; all ratios will be 0",
            path.display()
        );
    }
    for category in sorted_categories() {
        info!(
            "expected {}: {} records",
            category,
            table.with_expected(category).count()
        );
    }
    Ok(Stage1Output { table })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
