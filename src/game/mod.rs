//! Game engine: randomized board setup, transitions, skill and one-way rules.
//!
//! `GraphGame` owns the weight matrix, the RNG, and the session status.
//! All mutation goes through `step` (or the effect methods it calls).

mod engine;
mod env;
mod one_way;
mod status;

pub use engine::{BonusNodes, GraphGame};
pub use env::Environment;
pub use one_way::OneWayPairs;
pub use status::GameStatus;
