//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::graph::topology::GRAPH_SIZE;

/// Construction parameters for a [`GraphGame`](crate::game::GraphGame).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of nodes. Must match the topology table (11).
    pub graph_size: usize,

    /// Skill charges available for the whole game (default: 1).
    /// Charges are never replenished.
    pub skill_charges: u32,

    /// Random seed for randomization and skill draws.
    /// `None` draws a fresh seed from the thread-local entropy source.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            graph_size: GRAPH_SIZE,
            skill_charges: 1,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom graph size.
    pub fn with_graph_size(mut self, graph_size: usize) -> Self {
        self.graph_size = graph_size;
        self
    }

    /// Create a new config with a custom number of skill charges.
    pub fn with_skill_charges(mut self, charges: u32) -> Self {
        self.skill_charges = charges;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration against the fixed topology.
    pub fn validate(&self) -> Result<()> {
        if self.graph_size != GRAPH_SIZE {
            return Err(GameError::InvalidGraphSize {
                expected: GRAPH_SIZE,
                got: self.graph_size,
            });
        }
        Ok(())
    }
}
