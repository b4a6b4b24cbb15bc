//! The game board: fixed topology table plus the mutable weight matrix.

pub mod matrix;
pub mod topology;

pub use matrix::{NextNodes, WeightMatrix};
pub use topology::{
    BASE_TOPOLOGY, GRAPH_SIZE, MAX_WEIGHT, ONE_WAY_PAIRS, SKILL_EXTRA_NODES, THREE_POINT_CANDIDATES,
    TWO_POINT_CANDIDATES,
};
