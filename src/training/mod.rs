//! Training-side helpers for external learners.
//!
//! The engine does not learn. This module only records what a caller's
//! policy did, so the data can be stored or replayed.
//!
//! ## Overview
//!
//! - **Episode**: Records a complete game as a list of transitions
//! - **rollout**: Plays one game with a caller-supplied policy
//!
//! ## Usage
//!
//! ```
//! use graph_game::core::GameConfig;
//! use graph_game::game::GraphGame;
//! use graph_game::training::rollout;
//!
//! let mut game = GraphGame::from_config(GameConfig::default().with_seed(1)).unwrap();
//!
//! // Always take the first legal move
//! let episode = rollout(&mut game, |g| g.legal_actions()[0], 32).unwrap();
//!
//! assert!(episode.finished);
//! ```

mod episode;

pub use episode::{rollout, Episode, Transition};
