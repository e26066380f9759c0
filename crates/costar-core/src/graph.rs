//! Graph data provider trait

use crate::movie::MovieId;
use crate::person::PersonId;

/// Read-only view of the co-star graph consumed by the path finder.
///
/// The graph is bipartite (people and movies) but the search only ever
/// needs the person-to-person adjacency implied by shared movies, so that
/// is all a provider has to expose.
pub trait CoStarGraph: Send + Sync {
    /// Whether the person is known to this provider
    fn contains_person(&self, id: &PersonId) -> bool;

    /// `(movie, co-star)` pairs for every movie the person appears in and
    /// every other cast member of that movie.
    ///
    /// The person itself is never yielded. Implementations must return the
    /// pairs in a stable order so search results are reproducible.
    fn neighbors_for_person(&self, id: &PersonId) -> Vec<(MovieId, PersonId)>;
}
