//! Error types for tzpair.

use thiserror::Error;

/// Errors that can occur in tzpair operations.
#[derive(Error, Debug)]
pub enum TzPairError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown time zone: {0}")]
    UnknownZone(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tzpair operations.
pub type TzPairResult<T> = Result<T, TzPairError>;
