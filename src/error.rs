//! Error types for question answering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QaError {
    /// Any failure while extracting entities or generating an answer.
    #[error("{0}")]
    Internal(String),

    /// A dataset file could not be read, parsed, or validated.
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<serde_json::Error> for QaError {
    fn from(err: serde_json::Error) -> Self {
        QaError::Internal(format!("Failed to build data points: {}", err))
    }
}

pub type QaResult<T> = std::result::Result<T, QaError>;
