//! Environment trait: the contract an external learner drives.
//!
//! The learner only ever sees `Action` in and `Observation` out. It uses
//! `legal_actions` to build its action space and `step` to advance.

use crate::core::{Action, Observation, Result};

/// Reset-once / step-many environment.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty once no move is possible
/// - `step`: Must reject actions after the episode ended
/// - `seed`: Must reproduce the episode's randomization when replayed
pub trait Environment {
    /// Current caller-visible state.
    fn observation(&self) -> Observation;

    /// Every action accepted from the current state.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply one action.
    fn step(&mut self, action: &Action) -> Result<Observation>;

    /// Seed of the randomness behind this episode.
    fn seed(&self) -> u64;

    /// Whether the episode has ended.
    fn is_terminal(&self) -> bool {
        self.observation().done
    }
}
