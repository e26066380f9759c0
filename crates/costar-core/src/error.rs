//! Error types for Costar Core

use thiserror::Error;

/// Result type alias using Costar's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Costar error types
///
/// A disconnected pair is not an error: the search reports it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Attempted to remove from an empty frontier")]
    EmptyFrontier,

    #[error("Search aborted after exploring {limit} people")]
    SearchLimitExceeded { limit: usize },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<crate::limits::ValidationError> for Error {
    fn from(err: crate::limits::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
