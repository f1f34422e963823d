use crate::model::category::{Category, UNKNOWN_LABEL};

pub const RUN_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    Known(Category),
    Other(String),
    Missing,
}

impl Observation {
    pub fn from_field(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Observation::Missing,
            Some(s) => match Category::parse(s) {
                Some(c) => Observation::Known(c),
                None => Observation::Other(s.to_string()),
            },
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Observation::Known(c) => Some(*c),
            _ => None,
        }
    }

    /// Column label used by the distribution matrix.
    pub fn label(&self) -> &str {
        match self {
            Observation::Known(c) => c.name(),
            Observation::Other(s) => s.as_str(),
            Observation::Missing => UNKNOWN_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub expected: Category,
    pub runs: [Observation; RUN_COUNT],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows_read: usize,
    pub empty_rows: usize,
    pub unrecognized_rows: usize,
}

/// Loaded report. Never mutated after the loader returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
    stats: LoadStats,
}

impl Table {
    pub fn new(records: Vec<Record>, stats: LoadStats) -> Self {
        Self { records, stats }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn with_expected(&self, category: Category) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.expected == category)
    }
}
