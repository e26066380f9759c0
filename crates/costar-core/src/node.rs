//! Search nodes and the arena that owns them

use crate::movie::MovieId;
use crate::person::PersonId;
use crate::traversal::PathStep;

/// Index of a node in its [`NodeArena`], assigned in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A node of the search tree.
///
/// The root has neither parent nor action; every other node records the
/// movie that led to it from its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub id: NodeId,
    pub state: PersonId,
    pub parent: Option<NodeId>,
    pub action: Option<MovieId>,
    /// Distance from the root (root = 0)
    pub depth: u32,
}

impl SearchNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only storage for the nodes of one search.
///
/// Parents always precede their children, so walking parent links can
/// never cycle.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root node for `state`
    pub fn root(&mut self, state: PersonId) -> &SearchNode {
        self.push(state, None, None, 0)
    }

    /// Create a child of `parent` reached through `action`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this arena.
    pub fn child(&mut self, parent: NodeId, action: MovieId, state: PersonId) -> &SearchNode {
        let depth = self.nodes[parent.0].depth + 1;
        self.push(state, Some(parent), Some(action), depth)
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Steps from the root to `id`, in root-to-node order
    pub fn path_to(&self, id: NodeId) -> Vec<PathStep> {
        let mut steps = Vec::new();
        let mut current = self.get(id);

        while let Some(node) = current {
            let (Some(parent), Some(action)) = (node.parent, node.action.as_ref()) else {
                break;
            };
            steps.push(PathStep {
                movie: action.clone(),
                person: node.state.clone(),
            });
            current = self.get(parent);
        }

        steps.reverse();
        steps
    }

    fn push(
        &mut self,
        state: PersonId,
        parent: Option<NodeId>,
        action: Option<MovieId>,
        depth: u32,
    ) -> &SearchNode {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            id,
            state,
            parent,
            action,
            depth,
        });
        &self.nodes[id.0]
    }
}
