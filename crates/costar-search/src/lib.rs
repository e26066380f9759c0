//! Costar Search - resolving typed names to people
//!
//! Provides exact (case-insensitive) resolution with disambiguation and
//! fuzzy "did you mean" suggestions (nucleo).

pub mod candidates;
pub mod error;
pub mod exact;
pub mod traits;

#[cfg(feature = "fuzzy")]
pub mod fuzzy;

pub use candidates::{choose_candidate, describe_candidates, Candidate};
pub use error::{SearchError, SearchResult};
pub use exact::ExactNameResolver;
pub use traits::{NameResolver, Resolution};

#[cfg(feature = "fuzzy")]
pub use fuzzy::FuzzySuggester;
