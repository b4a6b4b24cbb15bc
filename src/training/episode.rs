//! Episode recording for training data collection.
//!
//! An episode records one complete game driven by an external policy:
//! - The node each decision was taken from
//! - The action taken and the points it earned
//! - The observation returned by the environment

use serde::{Deserialize, Serialize};

use crate::core::{Action, NodeId, Observation, Result};
use crate::game::Environment;

/// A single accepted transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Node the action was taken from.
    pub from: NodeId,

    /// The action that was taken.
    pub action: Action,

    /// Points earned by this transition.
    pub reward: u32,

    /// What the environment returned.
    pub observation: Observation,
}

/// A recorded game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Seed that reproduces the board and skill draws.
    pub seed: u64,

    /// Accepted transitions in order.
    pub transitions: Vec<Transition>,

    /// Points at the end of the recording.
    pub total_points: u32,

    /// Whether an end node was reached (false if the step cap hit first).
    pub finished: bool,
}

impl Episode {
    /// Create an empty episode.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            transitions: Vec::new(),
            total_points: 0,
            finished: false,
        }
    }

    /// Append a transition, deriving its reward from the running total.
    ///
    /// A total lower than the previous one records a reward of 0.
    pub fn record(&mut self, from: NodeId, action: Action, observation: Observation) {
        let reward = observation.points.saturating_sub(self.total_points);
        self.total_points = observation.points;
        self.finished = observation.done;
        self.transitions.push(Transition {
            from,
            action,
            reward,
            observation,
        });
    }

    /// Get the number of transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if no transition was recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Visited nodes, starting with the first decision node.
    pub fn path(&self) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = self.transitions.first().map(|t| t.from).into_iter().collect();
        path.extend(self.transitions.iter().map(|t| t.observation.cur_node));
        path
    }

    /// Per-step rewards.
    pub fn rewards(&self) -> impl Iterator<Item = u32> + '_ {
        self.transitions.iter().map(|t| t.reward)
    }

    /// Whether the skill was requested at any step.
    pub fn used_skill(&self) -> bool {
        self.transitions.iter().any(|t| t.action.skill_target().is_some())
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Drive `env` with `policy` until it ends or `max_steps` transitions were taken.
///
/// The policy sees the environment before each move. An action the
/// environment rejects aborts the rollout with that error.
pub fn rollout<E, F>(env: &mut E, mut policy: F, max_steps: usize) -> Result<Episode>
where
    E: Environment,
    F: FnMut(&E) -> Action,
{
    let mut episode = Episode::new(env.seed());

    while !env.is_terminal() && episode.len() < max_steps {
        let from = env.observation().cur_node;
        let action = policy(env);
        let observation = env.step(&action)?;
        episode.record(from, action, observation);
    }

    log::debug!(
        "rollout: {} steps, {} points, finished={}",
        episode.len(),
        episode.total_points,
        episode.finished
    );
    Ok(episode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(node: u8, points: u32, done: bool) -> Observation {
        Observation {
            cur_node: NodeId(node),
            points,
            done,
        }
    }

    #[test]
    fn test_record_derives_rewards() {
        let mut episode = Episode::new(1);
        episode.record(NodeId(0), Action::new(NodeId(2)), obs(2, 3, false));
        episode.record(NodeId(2), Action::new(NodeId(5)), obs(5, 5, false));

        assert_eq!(episode.rewards().collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(episode.total_points, 5);
        assert!(!episode.finished);
    }

    #[test]
    fn test_record_lower_total_gives_zero_reward() {
        let mut episode = Episode::new(1);
        episode.record(NodeId(0), Action::new(NodeId(2)), obs(2, 3, false));
        episode.record(NodeId(2), Action::new(NodeId(5)), obs(5, 1, false));

        assert_eq!(episode.rewards().collect::<Vec<_>>(), vec![3, 0]);
        assert_eq!(episode.total_points, 1);
    }

    #[test]
    fn test_path() {
        let mut episode = Episode::new(1);
        assert!(episode.path().is_empty());

        episode.record(NodeId(0), Action::new(NodeId(3)), obs(3, 1, false));
        episode.record(NodeId(3), Action::new(NodeId(6)), obs(6, 2, false));

        assert_eq!(episode.path(), vec![NodeId(0), NodeId(3), NodeId(6)]);
    }

    #[test]
    fn test_used_skill() {
        let mut episode = Episode::new(1);
        episode.record(NodeId(0), Action::new(NodeId(3)), obs(3, 1, false));
        assert!(!episode.used_skill());

        episode.record(NodeId(3), Action::with_skill(NodeId(6), NodeId(6)), obs(6, 4, false));
        assert!(episode.used_skill());
    }

    #[test]
    fn test_bincode_roundtrip() {
        let mut episode = Episode::new(77);
        episode.record(NodeId(0), Action::with_skill(NodeId(2), NodeId(5)), obs(2, 3, false));

        let bytes = episode.to_bytes().unwrap();
        assert_eq!(Episode::from_bytes(&bytes).unwrap(), episode);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(Episode::from_bytes(&[1, 2]).is_err());
    }
}
