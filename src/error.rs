use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {} does not exist", .0.display())]
    MissingInput(PathBuf),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to render {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },
}

impl ReportError {
    pub fn render(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        ReportError::Render {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
