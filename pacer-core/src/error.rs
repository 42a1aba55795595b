use thiserror::Error;

use pacer_model::ModelError;

#[derive(Error, Debug)]
pub enum PacerError {
    #[error("Invalid time format: {0:?} (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error("Unknown query: {0}")]
    UnknownQuery(String),

    #[error("Missing query parameter: {0}")]
    MissingParameter(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ModelError> for PacerError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidTimeFormat(raw) => PacerError::InvalidTimeFormat(raw),
        }
    }
}

pub type Result<T> = std::result::Result<T, PacerError>;
