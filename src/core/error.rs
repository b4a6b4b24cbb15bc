//! Error types for the game engine.

use thiserror::Error;

use super::node::NodeId;

/// Errors reported by [`GraphGame`](crate::game::GraphGame) and its helpers.
///
/// None of these leave the game unusable: after an error the caller may
/// issue another (valid) request against the same instance.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid transition: {to} is not reachable from {from}")]
    InvalidTransition { from: NodeId, to: NodeId },

    #[error("game already finished at {node} with {points} points")]
    GameAlreadyFinished { node: NodeId, points: u32 },

    #[error("unsupported graph size {got} (the topology table has {expected} nodes)")]
    InvalidGraphSize { expected: usize, got: usize },

    #[error("{node} is out of range for a graph of {graph_size} nodes")]
    InvalidNode { node: NodeId, graph_size: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

/// Convenience type alias for Results using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;
