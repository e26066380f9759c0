//! Frontier of discovered but unexpanded search nodes

use crate::error::{Error, Result};
use crate::node::SearchNode;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Order in which the frontier hands nodes back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// FIFO: breadth-first, yields shortest paths
    #[default]
    Queue,
    /// LIFO: depth-first, finds a path but not necessarily the shortest
    Stack,
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Queue => write!(f, "queue"),
            Self::Stack => write!(f, "stack"),
        }
    }
}

/// Nodes awaiting expansion.
///
/// Both disciplines share one deque; they only differ in which end
/// `remove` takes from. Per-state counts keep `contains_state` O(1) even
/// when the same state is queued more than once.
#[derive(Debug)]
pub struct Frontier {
    discipline: Discipline,
    nodes: VecDeque<SearchNode>,
    states: HashMap<PersonId, usize>,
}

impl Frontier {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            nodes: VecDeque::new(),
            states: HashMap::new(),
        }
    }

    /// Breadth-first frontier
    pub fn queue() -> Self {
        Self::new(Discipline::Queue)
    }

    /// Depth-first frontier
    pub fn stack() -> Self {
        Self::new(Discipline::Stack)
    }

    pub fn add(&mut self, node: SearchNode) {
        *self.states.entry(node.state.clone()).or_insert(0) += 1;
        self.nodes.push_back(node);
    }

    pub fn contains_state(&self, state: &PersonId) -> bool {
        self.states.contains_key(state)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Take the next node according to the discipline.
    ///
    /// Callers check [`Frontier::is_empty`] first; an empty removal is a
    /// logic error and reported as [`Error::EmptyFrontier`].
    pub fn remove(&mut self) -> Result<SearchNode> {
        let node = match self.discipline {
            Discipline::Queue => self.nodes.pop_front(),
            Discipline::Stack => self.nodes.pop_back(),
        }
        .ok_or(Error::EmptyFrontier)?;

        if let Some(count) = self.states.get_mut(&node.state) {
            *count -= 1;
            if *count == 0 {
                self.states.remove(&node.state);
            }
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeArena;

    fn fill(frontier: &mut Frontier, states: &[&str]) {
        let mut arena = NodeArena::new();
        for state in states {
            frontier.add(arena.root(PersonId::from(*state)).clone());
        }
    }

    fn drain(frontier: &mut Frontier) -> Vec<String> {
        let mut order = Vec::new();
        while !frontier.is_empty() {
            order.push(frontier.remove().unwrap().state.0);
        }
        order
    }

    #[test]
    fn test_queue_removes_in_insertion_order() {
        let mut frontier = Frontier::queue();
        fill(&mut frontier, &["1", "2", "3"]);

        assert_eq!(drain(&mut frontier), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_stack_removes_in_reverse_order() {
        let mut frontier = Frontier::stack();
        fill(&mut frontier, &["1", "2", "3"]);

        assert_eq!(drain(&mut frontier), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_contains_state_tracks_removal() {
        let mut frontier = Frontier::queue();
        fill(&mut frontier, &["a", "b"]);
        assert!(frontier.contains_state(&PersonId::from("a")));

        let removed = frontier.remove().unwrap();
        assert_eq!(removed.state, PersonId::from("a"));
        assert!(!frontier.contains_state(&PersonId::from("a")));
        assert!(frontier.contains_state(&PersonId::from("b")));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_duplicate_states_are_counted() {
        let mut frontier = Frontier::queue();
        fill(&mut frontier, &["a", "a"]);

        frontier.remove().unwrap();
        assert!(frontier.contains_state(&PersonId::from("a")));
        frontier.remove().unwrap();
        assert!(!frontier.contains_state(&PersonId::from("a")));
    }

    #[test]
    fn test_remove_from_empty_frontier_fails() {
        let mut frontier = Frontier::stack();
        assert_eq!(frontier.remove().unwrap_err(), Error::EmptyFrontier);
    }
}
