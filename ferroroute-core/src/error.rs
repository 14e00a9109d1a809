use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown station: {0}")]
    UnknownStation(String),
    #[error("Invalid criterion: {0} (expected one of: time, distance, transfers)")]
    InvalidCriterion(String),
    #[error("No path between {start} and {end}")]
    NoPath { start: String, end: String },
    #[error("Duplicate station: {0}")]
    DuplicateStation(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
