//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{Action, GameConfig, NodeId};
use crate::game::GraphGame;

use super::py_core::{PyAction, PyNextNode, PyObservation};

/// Python wrapper for GraphGame.
#[pyclass(name = "GraphGame")]
pub struct PyGraphGame {
    game: GraphGame,
}

#[pymethods]
impl PyGraphGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed; None draws a fresh one
    /// - graph_size: Must be 11
    /// - skill_charges: Skill uses for the whole game
    #[new]
    #[pyo3(signature = (seed = None, graph_size = 11, skill_charges = 1))]
    fn new(seed: Option<u64>, graph_size: usize, skill_charges: u32) -> PyResult<Self> {
        let mut config = GameConfig::default()
            .with_graph_size(graph_size)
            .with_skill_charges(skill_charges);
        config.seed = seed;
        Ok(Self {
            game: GraphGame::from_config(config)?,
        })
    }

    /// Move to `next_node`, optionally firing the skill at `skill` first.
    #[pyo3(signature = (next_node, skill = 0))]
    fn step(&mut self, next_node: u8, skill: u8) -> PyResult<PyObservation> {
        let obs = self.game.step(&Action::from_raw(next_node, skill))?;
        Ok(PyObservation(obs))
    }

    /// Apply a prebuilt action.
    fn step_action(&mut self, action: &PyAction) -> PyResult<PyObservation> {
        Ok(PyObservation(self.game.step(&action.0)?))
    }

    /// Outgoing edges of `node`.
    fn get_next_nodes(&self, node: u8) -> PyResult<Vec<PyNextNode>> {
        let next = self.game.get_next_nodes(NodeId(node))?;
        Ok(next.into_iter().map(PyNextNode).collect())
    }

    /// Every action accepted from the current node.
    fn legal_actions(&self) -> Vec<PyAction> {
        self.game.legal_actions().into_iter().map(PyAction).collect()
    }

    /// The full weight matrix as nested lists.
    fn graph(&self) -> Vec<Vec<u8>> {
        self.game.graph().to_rows()
    }

    /// One-way pairs as `(a, b)` tuples.
    fn one_way_pairs(&self) -> Vec<(u8, u8)> {
        self.game.one_way_pairs().pairs().map(|(a, b)| (a.0, b.0)).collect()
    }

    /// Nodes that end the game.
    fn end_nodes(&self) -> Vec<u8> {
        self.game.end_nodes().into_iter().map(|n| n.0).collect()
    }

    #[getter]
    fn cur_node(&self) -> u8 {
        self.game.current_node().0
    }

    #[getter]
    fn points(&self) -> u32 {
        self.game.points()
    }

    #[getter]
    fn steps(&self) -> u32 {
        self.game.steps()
    }

    #[getter]
    fn skill_left(&self) -> u32 {
        self.game.skill_left()
    }

    #[getter]
    fn done(&self) -> bool {
        self.game.is_done()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.game.seed()
    }

    fn __repr__(&self) -> String {
        format!(
            "GraphGame(cur_node={}, points={}, steps={}, done={})",
            self.game.current_node().0,
            self.game.points(),
            self.game.steps(),
            self.game.is_done()
        )
    }
}
