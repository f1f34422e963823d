use std::fmt;

/// Outcome label assigned to a test case, either as ground truth or as the
/// verdict produced by one evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CompletelyCorrect,
    PartiallyCorrect,
    Incorrect,
    Irrelevant,
}

/// Sentinel label for run columns with no recorded verdict.
pub const UNKNOWN_LABEL: &str = "Unknown";

impl Category {
    pub const ALL: [Category; 4] = [
        Category::CompletelyCorrect,
        Category::PartiallyCorrect,
        Category::Incorrect,
        Category::Irrelevant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::CompletelyCorrect => "CompletelyCorrect",
            Category::PartiallyCorrect => "PartiallyCorrect",
            Category::Incorrect => "Incorrect",
            Category::Irrelevant => "Irrelevant",
        }
    }

    /// CompletelyCorrect and PartiallyCorrect are interchangeable under loose scoring.
    pub fn is_correct_ish(self) -> bool {
        matches!(self, Category::CompletelyCorrect | Category::PartiallyCorrect)
    }

    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == s)
    }
}

/// All categories ordered by name, the order used for chart axes and matrix rows.
pub fn sorted_categories() -> Vec<Category> {
    let mut out = Category::ALL.to_vec();
    out.sort_by_key(|c| c.name());
    out
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
