//! Shortest-path search over the co-star graph

use crate::error::{Error, Result};
use crate::frontier::{Discipline, Frontier};
use crate::graph::CoStarGraph;
use crate::limits::validate_explore_limit;
use crate::movie::MovieId;
use crate::node::NodeArena;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Path query builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathQuery {
    pub source: PersonId,
    pub target: PersonId,

    /// Frontier discipline; only `Queue` guarantees a shortest path
    #[serde(default)]
    pub discipline: Discipline,

    /// Abort after expanding this many people
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_explored: Option<usize>,
}

impl PathQuery {
    pub fn new(source: impl Into<PersonId>, target: impl Into<PersonId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            discipline: Discipline::Queue,
            max_explored: None,
        }
    }

    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn with_max_explored(mut self, limit: usize) -> Self {
        self.max_explored = Some(limit);
        self
    }
}

/// One hop of a path: the movie shared with the previous person, and the
/// person it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub movie: MovieId,
    pub person: PersonId,
}

impl PathStep {
    pub fn new(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        Self {
            movie: movie.into(),
            person: person.into(),
        }
    }
}

/// Search statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// People removed from the frontier and expanded
    pub nodes_explored: usize,
    /// Search nodes created, root included
    pub nodes_generated: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
    pub path_found: bool,
}

/// Result of a path search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub source: PersonId,
    pub target: PersonId,

    /// Steps from source to target; `None` when they are not connected
    pub path: Option<Vec<PathStep>>,

    pub stats: SearchStats,
}

impl PathResult {
    /// Degrees of separation, or `None` when not connected
    pub fn degrees(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Path search engine
pub struct PathFinder;

impl PathFinder {
    /// Shortest path from `source` to `target` using breadth-first search.
    ///
    /// Returns `Ok(Some(vec![]))` when source and target are the same
    /// person and `Ok(None)` when they are not connected.
    pub fn shortest_path<G: CoStarGraph + ?Sized>(
        graph: &G,
        source: &PersonId,
        target: &PersonId,
    ) -> Result<Option<Vec<PathStep>>> {
        let query = PathQuery::new(source.clone(), target.clone());
        Ok(Self::execute(&query, graph)?.path)
    }

    /// Execute a path query
    pub fn execute<G: CoStarGraph + ?Sized>(query: &PathQuery, graph: &G) -> Result<PathResult> {
        tracing::debug!(
            "Executing path search: source={}, target={}, discipline={}",
            query.source,
            query.target,
            query.discipline
        );

        if let Some(limit) = query.max_explored {
            validate_explore_limit(limit)?;
        }
        for id in [&query.source, &query.target] {
            if !graph.contains_person(id) {
                return Err(Error::PersonNotFound(id.to_string()));
            }
        }

        if query.source == query.target {
            return Ok(PathResult {
                source: query.source.clone(),
                target: query.target.clone(),
                path: Some(Vec::new()),
                stats: SearchStats {
                    path_found: true,
                    ..SearchStats::default()
                },
            });
        }

        let (path, stats) = Self::search(query, graph)?;
        Ok(PathResult {
            source: query.source.clone(),
            target: query.target.clone(),
            path,
            stats,
        })
    }

    fn search<G: CoStarGraph + ?Sized>(
        query: &PathQuery,
        graph: &G,
    ) -> Result<(Option<Vec<PathStep>>, SearchStats)> {
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new(query.discipline);
        let mut explored: HashSet<PersonId> = HashSet::new();
        let mut stats = SearchStats::default();

        frontier.add(arena.root(query.source.clone()).clone());
        stats.max_frontier = 1;

        loop {
            if frontier.is_empty() {
                stats.nodes_generated = arena.len();
                tracing::debug!(
                    "No path from {} to {} after exploring {} people",
                    query.source,
                    query.target,
                    stats.nodes_explored
                );
                return Ok((None, stats));
            }

            if let Some(limit) = query.max_explored {
                if stats.nodes_explored >= limit {
                    tracing::warn!("Search limit of {} explored people reached", limit);
                    return Err(Error::SearchLimitExceeded { limit });
                }
            }

            let node = frontier.remove()?;
            stats.nodes_explored += 1;
            explored.insert(node.state.clone());

            for (movie, person) in graph.neighbors_for_person(&node.state) {
                if explored.contains(&person) || frontier.contains_state(&person) {
                    continue;
                }

                let child = arena.child(node.id, movie, person).clone();

                if child.state == query.target {
                    let path = arena.path_to(child.id);
                    stats.nodes_generated = arena.len();
                    stats.path_found = true;
                    tracing::debug!(
                        "Found path of {} steps after exploring {} people",
                        path.len(),
                        stats.nodes_explored
                    );
                    return Ok((Some(path), stats));
                }

                frontier.add(child);
                stats.max_frontier = stats.max_frontier.max(frontier.len());
            }
        }
    }
}
