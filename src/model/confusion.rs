use crate::model::category::Category;

/// Dense expected × observed count matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub rows: Vec<Category>,
    pub columns: Vec<String>,
    pub counts: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    pub fn row_sum(&self, row: Category) -> u64 {
        self.rows
            .iter()
            .position(|&c| c == row)
            .map(|r| self.counts[r].iter().sum())
            .unwrap_or(0)
    }

    pub fn max_count(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}
