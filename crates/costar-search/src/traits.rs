//! Name resolver traits

use costar_core::{Dataset, PersonId};

pub use crate::error::{SearchError, SearchResult as Result};

/// Outcome of looking up a typed name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    Unique(PersonId),
    /// Several people share the name; ids are in ascending order
    Ambiguous(Vec<PersonId>),
}

impl Resolution {
    pub fn from_ids(mut ids: Vec<PersonId>) -> Self {
        match ids.len() {
            0 => Self::NotFound,
            1 => Self::Unique(ids.remove(0)),
            _ => Self::Ambiguous(ids),
        }
    }
}

/// Trait for turning a typed name into person ids
pub trait NameResolver: Send + Sync {
    fn resolve(&self, name: &str, dataset: &Dataset) -> Result<Resolution>;
}
