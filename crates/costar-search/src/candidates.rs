//! Disambiguation between people sharing a name

use crate::error::{SearchError, SearchResult};
use costar_core::{Dataset, PersonId};
use serde::Serialize;

/// What a user sees when asked to pick between people with the same name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<u16>,
}

/// Candidate details for each id, skipping ids the dataset does not know
pub fn describe_candidates(dataset: &Dataset, ids: &[PersonId]) -> Vec<Candidate> {
    ids.iter()
        .filter_map(|id| dataset.person(id))
        .map(|person| Candidate {
            id: person.id.clone(),
            name: person.name.clone(),
            birth: person.birth,
        })
        .collect()
}

/// Accept a typed id only if it is one of the offered candidates
pub fn choose_candidate(candidates: &[PersonId], answer: &str) -> SearchResult<PersonId> {
    let answer = answer.trim();
    candidates
        .iter()
        .find(|id| id.as_str() == answer)
        .cloned()
        .ok_or_else(|| SearchError::NotACandidate(answer.to_string()))
}
