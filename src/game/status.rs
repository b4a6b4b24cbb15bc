//! Per-session game status.

use serde::{Deserialize, Serialize};

use crate::core::{NodeId, Observation};

/// Mutable session state of one game.
///
/// Created with the game and only advanced by `GraphGame::step`.
/// There is no reset: a new game needs a new instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    /// Node the player is on (starts at node 0).
    pub current_node: NodeId,

    /// Cumulative points.
    pub points: u32,

    /// Accepted transitions so far.
    pub steps: u32,

    /// Skill charges remaining.
    pub skill_left: u32,

    /// Whether the player has reached an end node.
    pub done: bool,
}

impl GameStatus {
    /// Fresh status at the start node.
    #[must_use]
    pub fn new(skill_charges: u32) -> Self {
        Self {
            current_node: NodeId::START,
            points: 0,
            steps: 0,
            skill_left: skill_charges,
            done: false,
        }
    }

    /// Whether a skill charge remains.
    #[must_use]
    pub fn has_skill(&self) -> bool {
        self.skill_left > 0
    }

    /// Spend one skill charge. Does nothing once none remain.
    pub fn consume_skill(&mut self) {
        self.skill_left = self.skill_left.saturating_sub(1);
    }

    /// Record an accepted move to `node` worth `points`.
    pub fn advance(&mut self, node: NodeId, points: u8) {
        self.steps += 1;
        self.points += u32::from(points);
        self.current_node = node;
    }

    /// The caller-visible view of this status.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation {
            cur_node: self.current_node,
            points: self.points,
            done: self.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_status() {
        let status = GameStatus::new(1);
        assert_eq!(status.current_node, NodeId(0));
        assert_eq!(status.points, 0);
        assert_eq!(status.steps, 0);
        assert_eq!(status.skill_left, 1);
        assert!(!status.done);
    }

    #[test]
    fn test_consume_skill() {
        let mut status = GameStatus::new(1);
        assert!(status.has_skill());

        status.consume_skill();
        assert!(!status.has_skill());

        status.consume_skill();
        assert_eq!(status.skill_left, 0);
    }

    #[test]
    fn test_advance() {
        let mut status = GameStatus::new(1);
        status.advance(NodeId(2), 3);
        status.advance(NodeId(4), 1);

        assert_eq!(status.current_node, NodeId(4));
        assert_eq!(status.points, 4);
        assert_eq!(status.steps, 2);
        assert_eq!(
            status.observation(),
            Observation {
                cur_node: NodeId(4),
                points: 4,
                done: false
            }
        );
    }
}
