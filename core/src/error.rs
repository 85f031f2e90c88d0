use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Record count must be greater than zero")]
    InvalidCount,

    #[error("Names per shift must be greater than zero")]
    InvalidNamesPerShift,

    #[error("Invalid date range: end {end} must be after start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Corpus exhausted: requested {requested} unique addresses, produced {produced}")]
    CorpusExhausted { requested: usize, produced: usize },

    #[error("No problem corpus for agency '{value}'")]
    UnknownAgency { value: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
