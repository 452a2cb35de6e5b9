//! Core error types for the Chinook view models

use thiserror::Error;

/// Result type alias using `ChinookError`
pub type Result<T> = std::result::Result<T, ChinookError>;

/// Core error type for the Chinook view models
///
/// A constructed `PlaylistTrackView` never fails. Errors only come out of
/// builder completion and the wire codec.
#[derive(Error, Debug)]
pub enum ChinookError {
    /// A required field was never set on a builder
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Database errors (row decoding)
    #[error("Database error: {0}")]
    Database(String),
}

impl ChinookError {
    /// Create a missing field error
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for ChinookError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
