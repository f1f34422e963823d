use std::path::Path;

pub mod reader;
pub mod row;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::ReportError;
use crate::model::category::Category;
use crate::model::record::{LoadStats, Record, Table};
use reader::open_maybe_gz;
use row::{RawRow, missing_columns};

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

pub fn load_report(path: &Path, options: LoadOptions) -> Result<Table, ReportError> {
    let source = open_maybe_gz(path)?;
    info!("loading experiment report from {}", path.display());

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(ReportError::MalformedInput(format!(
            "{} has no header row",
            path.display()
        )));
    }
    let header_names: Vec<&str> = headers.iter().collect();
    let missing = missing_columns(&header_names);
    if !missing.is_empty() {
        return Err(ReportError::MalformedInput(format!(
            "{} is missing required columns: {}",
            path.display(),
            missing.join(", ")
        )));
    }

    let mut stats = LoadStats::default();
    let mut records = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        stats.rows_read += 1;
        let line_no = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(str::is_empty) {
            stats.empty_rows += 1;
            continue;
        }
        // short rows: absent trailing fields read as empty
        while record.len() < headers.len() {
            record.push_field("");
        }
        let raw: RawRow = record.deserialize(Some(&headers))?;
        match parse_record(&raw) {
            Some(rec) => records.push(rec),
            None => {
                debug!(
                    "dropping row with unrecognized expected result (line {}, value {:?})",
                    line_no,
                    raw.expected.as_deref().unwrap_or("")
                );
                stats.unrecognized_rows += 1;
            }
        }
    }

    info!(
        "loaded {} records ({} rows read, {} empty, {} with unrecognized expected result)",
        records.len(),
        stats.rows_read,
        stats.empty_rows,
        stats.unrecognized_rows
    );

    Ok(Table::new(records, stats))
}

pub fn parse_record(raw: &RawRow) -> Option<Record> {
    let expected = Category::parse(raw.expected.as_deref()?.trim())?;
    Some(Record {
        expected,
        runs: raw.observations(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
