//! Error types for meshkit

use thiserror::Error;

/// Main error type for meshkit operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid token for {family}: {token:?}")]
    InvalidToken { family: &'static str, token: String },

    #[error("Missing key: {0}")]
    MissingKey(String),

    #[error("Invalid {expected} value: {value:?}")]
    InvalidValue { expected: &'static str, value: String },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Check whether this error came from an unknown enum token
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, Error::InvalidToken { .. })
    }
}

/// Result type alias for meshkit operations
pub type Result<T> = std::result::Result<T, Error>;
