//! Exact name resolution against the dataset's name index

use crate::traits::{NameResolver, Resolution, Result};
use costar_core::limits::validate_person_name;
use costar_core::Dataset;

/// Case-insensitive exact match on the full name (stateless)
pub struct ExactNameResolver;

impl ExactNameResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExactNameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver for ExactNameResolver {
    fn resolve(&self, name: &str, dataset: &Dataset) -> Result<Resolution> {
        validate_person_name(name)?;

        let ids = dataset.person_ids_for_name(name.trim());
        tracing::debug!("Name '{}' matched {} people", name.trim(), ids.len());
        Ok(Resolution::from_ids(ids))
    }
}
