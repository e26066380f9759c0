//! Search error types

use thiserror::Error;

/// Result type alias for name resolution
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Name resolution error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("'{0}' is not one of the listed person ids")]
    NotACandidate(String),
}

impl From<costar_core::limits::ValidationError> for SearchError {
    fn from(err: costar_core::limits::ValidationError) -> Self {
        Self::InvalidName(err.to_string())
    }
}
