//! The action/observation contract between the engine and its caller.
//!
//! An action names the next node to move to and, optionally, a skill
//! target. An observation is the only state handed back after a step.

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// A single player move.
///
/// ## Example
///
/// ```
/// use graph_game::core::{Action, NodeId};
///
/// // Plain move
/// let walk = Action::new(NodeId(2));
///
/// // Move after upgrading node 5
/// let boosted = Action::with_skill(NodeId(2), NodeId(5));
///
/// // Raw form: skill 0 means "no skill"
/// assert_eq!(Action::from_raw(2, 0), walk);
/// assert_eq!(Action::from_raw(2, 5), boosted);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Requested next node.
    pub next_node: NodeId,

    /// Skill target, if the skill should be used this step.
    pub skill: Option<NodeId>,
}

impl Action {
    /// Create a move without skill.
    #[must_use]
    pub const fn new(next_node: NodeId) -> Self {
        Self {
            next_node,
            skill: None,
        }
    }

    /// Create a move that fires the skill at `target` first.
    #[must_use]
    pub const fn with_skill(next_node: NodeId, target: NodeId) -> Self {
        Self {
            next_node,
            skill: Some(target),
        }
    }

    /// Build from raw integers, treating skill `0` as "no skill".
    #[must_use]
    pub fn from_raw(next_node: u8, skill: u8) -> Self {
        Self {
            next_node: NodeId(next_node),
            skill: (skill != 0).then_some(NodeId(skill)),
        }
    }

    /// The skill target if it would actually fire (non-zero target).
    #[must_use]
    pub fn skill_target(&self) -> Option<NodeId> {
        self.skill.filter(|target| !target.is_start())
    }
}

/// What the caller sees after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Node the player is now on.
    pub cur_node: NodeId,
    /// Cumulative points.
    pub points: u32,
    /// Whether the player reached an end node.
    pub done: bool,
}

/// An outgoing edge: neighbor and the points earned for moving there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextNode {
    pub node: NodeId,
    pub points: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_zero_skill_is_none() {
        let action = Action::from_raw(3, 0);
        assert_eq!(action.next_node, NodeId(3));
        assert_eq!(action.skill, None);
    }

    #[test]
    fn test_skill_target_filters_start() {
        assert_eq!(Action::with_skill(NodeId(2), NodeId(0)).skill_target(), None);
        assert_eq!(Action::with_skill(NodeId(2), NodeId(5)).skill_target(), Some(NodeId(5)));
        assert_eq!(Action::new(NodeId(2)).skill_target(), None);
    }

    #[test]
    fn test_action_serde() {
        let action = Action::with_skill(NodeId(4), NodeId(7));
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
