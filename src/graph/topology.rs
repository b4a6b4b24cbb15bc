//! Fixed base topology and scoring tables.

use crate::core::NodeId;

/// Number of nodes in the board.
pub const GRAPH_SIZE: usize = 11;

/// Highest edge value; what the skill upgrades edges to.
pub const MAX_WEIGHT: u8 = 3;

/// Base adjacency before randomization. Every edge is worth 1 point.
///
/// Nodes 9 and 10 have no outgoing edges and end the game.
#[rustfmt::skip]
pub const BASE_TOPOLOGY: [[u8; GRAPH_SIZE]; GRAPH_SIZE] = [
//   0  1  2  3  4  5  6  7  8  9  10
    [0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0], // 0
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0], // 1
    [0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0], // 2
    [0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0], // 3
    [0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0], // 4
    [0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0], // 5
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0], // 6
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1], // 7
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1], // 8
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 9
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 10
];

/// One of these becomes worth 2 points per game.
pub const TWO_POINT_CANDIDATES: [NodeId; 4] = [NodeId(3), NodeId(4), NodeId(5), NodeId(6)];

/// One of these becomes worth 3 points per game.
pub const THREE_POINT_CANDIDATES: [NodeId; 2] = [NodeId(2), NodeId(7)];

/// Pairs whose mutual edge is closed once a member is reached.
pub const ONE_WAY_PAIRS: [(NodeId, NodeId); 2] = [(NodeId(4), NodeId(5)), (NodeId(6), NodeId(7))];

/// Number of random extra nodes the skill upgrades besides its target.
pub const SKILL_EXTRA_NODES: usize = 2;
