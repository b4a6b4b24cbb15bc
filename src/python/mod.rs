//! Python bindings for the graph game environment.
//!
//! # Quick Start
//!
//! ```python
//! import graph_game as gg
//!
//! game = gg.GraphGame(seed=42)
//!
//! # Enumerate moves and take one
//! moves = game.get_next_nodes(game.cur_node)
//! obs = game.step(moves[0].node, skill=5)
//!
//! cur_node, points, done = obs.as_tuple()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameError;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// graph_game: a graph-traversal scoring environment for RL training.
#[pymodule]
fn graph_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAction>()?;
    m.add_class::<PyObservation>()?;
    m.add_class::<PyNextNode>()?;
    m.add_class::<PyGraphGame>()?;

    Ok(())
}
