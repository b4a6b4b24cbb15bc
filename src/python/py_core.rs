//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Action, NextNode, Observation};

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Create an action. `skill = 0` means no skill.
    #[new]
    #[pyo3(signature = (next_node, skill = 0))]
    fn new(next_node: u8, skill: u8) -> Self {
        Self(Action::from_raw(next_node, skill))
    }

    /// Requested next node.
    #[getter]
    fn next_node(&self) -> u8 {
        self.0.next_node.0
    }

    /// Skill target, 0 if none.
    #[getter]
    fn skill(&self) -> u8 {
        self.0.skill.map_or(0, |n| n.0)
    }

    fn __repr__(&self) -> String {
        format!("Action(next_node={}, skill={})", self.next_node(), self.skill())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        (self.next_node() as u64) << 8 | self.skill() as u64
    }
}

/// Python wrapper for Observation.
#[pyclass(name = "Observation")]
#[derive(Clone, Debug)]
pub struct PyObservation(pub Observation);

#[pymethods]
impl PyObservation {
    #[getter]
    fn cur_node(&self) -> u8 {
        self.0.cur_node.0
    }

    #[getter]
    fn points(&self) -> u32 {
        self.0.points
    }

    #[getter]
    fn done(&self) -> bool {
        self.0.done
    }

    /// Unpack as `(cur_node, points, done)`.
    fn as_tuple(&self) -> (u8, u32, bool) {
        (self.0.cur_node.0, self.0.points, self.0.done)
    }

    fn __repr__(&self) -> String {
        format!(
            "Observation(cur_node={}, points={}, done={})",
            self.0.cur_node.0, self.0.points, self.0.done
        )
    }
}

/// Python wrapper for NextNode.
#[pyclass(name = "NextNode")]
#[derive(Clone, Debug)]
pub struct PyNextNode(pub NextNode);

#[pymethods]
impl PyNextNode {
    #[getter]
    fn node(&self) -> u8 {
        self.0.node.0
    }

    #[getter]
    fn points(&self) -> u8 {
        self.0.points
    }

    fn __repr__(&self) -> String {
        format!("NextNode(node={}, points={})", self.0.node.0, self.0.points)
    }
}
