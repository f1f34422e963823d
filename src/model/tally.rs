use crate::model::category::Category;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TallyEntry {
    pub category: Category,
    pub matched: u64,
    pub total: u64,
    pub ratio: f64,
}

/// Per-category accuracy, one entry per category in name order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTally {
    pub entries: Vec<TallyEntry>,
}

impl CategoryTally {
    pub fn percentages(&self) -> Vec<(Category, f64)> {
        self.entries
            .iter()
            .map(|e| (e.category, e.ratio * 100.0))
            .collect()
    }
}

pub fn safe_ratio(matched: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64
}
