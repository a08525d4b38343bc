//! Error types for tasacalc

use thiserror::Error;

/// Main error type for tasacalc
#[derive(Error, Debug)]
pub enum TasaError {
    #[error("Source error: {0}")]
    SourceError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for tasacalc operations
pub type Result<T> = std::result::Result<T, TasaError>;
