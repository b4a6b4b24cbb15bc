//! # graph-game
//!
//! A single-player graph-traversal scoring game used as an RL environment.
//!
//! ## Rules
//!
//! 1. **Board**: 11 nodes joined by directed edges. Each edge is worth
//!    points; weight 0 means no edge.
//!
//! 2. **Randomization**: Every game promotes one of nodes {3,4,5,6} to
//!    2-point and one of {2,7} to 3-point incoming edges.
//!
//! 3. **Skill**: Once per game, upgrade every edge into a chosen node and
//!    two random others to 3 points.
//!
//! 4. **One-way pairs**: Reaching 4, 5, 6 or 7 closes the edge back to its
//!    partner in (4,5) / (6,7).
//!
//! 5. **End**: The game ends on a node with no outgoing edges.
//!
//! ## Modules
//!
//! - `core`: Node IDs, actions, observations, RNG, configuration, errors
//! - `graph`: Topology table and weight matrix
//! - `game`: The `GraphGame` engine and the `Environment` trait
//! - `training`: Episode recording for external learners

pub mod core;
pub mod game;
pub mod graph;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, GameConfig, GameError, GameRng, NextNode, NodeId, Observation, Result,
};

pub use crate::game::{BonusNodes, Environment, GameStatus, GraphGame, OneWayPairs};

pub use crate::graph::{NextNodes, WeightMatrix, GRAPH_SIZE};

pub use crate::training::{rollout, Episode, Transition};
