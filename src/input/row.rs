use serde::Deserialize;

use crate::model::record::{Observation, RUN_COUNT};

pub const EXPECTED_COLUMN: &str = "Expected_Result";
pub const RUN_COLUMNS: [&str; RUN_COUNT] = [
    "Run_1_Actual",
    "Run_2_Actual",
    "Run_3_Actual",
    "Run_4_Actual",
    "Run_5_Actual",
];

/// One data line of the experiment report. Only the columns the scorers need
/// are read; explanations, question text and summary columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Expected_Result", default)]
    pub expected: Option<String>,
    #[serde(rename = "Run_1_Actual", default)]
    pub run_1: Option<String>,
    #[serde(rename = "Run_2_Actual", default)]
    pub run_2: Option<String>,
    #[serde(rename = "Run_3_Actual", default)]
    pub run_3: Option<String>,
    #[serde(rename = "Run_4_Actual", default)]
    pub run_4: Option<String>,
    #[serde(rename = "Run_5_Actual", default)]
    pub run_5: Option<String>,
}

impl RawRow {
    pub fn observations(&self) -> [Observation; RUN_COUNT] {
        [
            Observation::from_field(self.run_1.as_deref()),
            Observation::from_field(self.run_2.as_deref()),
            Observation::from_field(self.run_3.as_deref()),
            Observation::from_field(self.run_4.as_deref()),
            Observation::from_field(self.run_5.as_deref()),
        ]
    }
}

pub fn missing_columns(headers: &[&str]) -> Vec<&'static str> {
    std::iter::once(EXPECTED_COLUMN)
        .chain(RUN_COLUMNS)
        .filter(|name| !headers.contains(name))
        .collect()
}
