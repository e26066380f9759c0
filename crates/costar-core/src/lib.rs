//! Costar Core - co-star graph model and shortest-path search
//!
//! This crate provides the person/movie data model, the [`CoStarGraph`]
//! provider trait, and the breadth-first [`PathFinder`] that computes
//! degrees of separation without materializing the person-to-person graph.

pub mod dataset;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod limits;
pub mod movie;
pub mod node;
pub mod person;
pub mod traversal;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use frontier::{Discipline, Frontier};
pub use graph::CoStarGraph;
pub use movie::{Movie, MovieId};
pub use node::{NodeArena, NodeId, SearchNode};
pub use person::{Person, PersonId};
pub use traversal::{PathFinder, PathQuery, PathResult, PathStep, SearchStats};
