//! Core engine types: nodes, actions, observations, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod node;
pub mod rng;

pub use action::{Action, NextNode, Observation};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use node::NodeId;
pub use rng::GameRng;
