//! Input validation limits

/// Maximum length for a person name typed by a user (256 chars)
pub const MAX_NAME_LEN: usize = 256;

/// Maximum number of people a single search may be told to explore
pub const MAX_EXPLORE_LIMIT: usize = 10_000_000;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyName,
    NameTooLong { len: usize, max: usize },
    ZeroExploreLimit,
    ExploreLimitTooLarge { limit: usize, max: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameTooLong { len, max } => {
                write!(f, "Name too long: {} chars (max {})", len, max)
            }
            Self::ZeroExploreLimit => write!(f, "Explore limit must be at least 1"),
            Self::ExploreLimitTooLarge { limit, max } => {
                write!(f, "Explore limit too large: {} (max {})", limit, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a person name before lookup
pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate a search expansion limit
pub fn validate_explore_limit(limit: usize) -> Result<(), ValidationError> {
    if limit == 0 {
        return Err(ValidationError::ZeroExploreLimit);
    }
    if limit > MAX_EXPLORE_LIMIT {
        return Err(ValidationError::ExploreLimitTooLarge {
            limit,
            max: MAX_EXPLORE_LIMIT,
        });
    }
    Ok(())
}
