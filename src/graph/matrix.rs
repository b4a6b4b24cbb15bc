//! Square weight matrix: entry (row, col) is the value of edge row → col.
//!
//! Weight 0 means "no edge". The matrix never changes size after
//! construction; it is only ever mutated cell by cell.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::topology::{BASE_TOPOLOGY, GRAPH_SIZE};
use crate::core::{NextNode, NodeId};

/// Outgoing edges of a node. The base topology never exceeds 3 per row.
pub type NextNodes = SmallVec<[NextNode; 4]>;

/// Row-major N×N edge weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl WeightMatrix {
    /// Build the unrandomized base board.
    #[must_use]
    pub fn base() -> Self {
        Self::from_rows(&BASE_TOPOLOGY)
    }

    /// Build from a square table of rows.
    #[must_use]
    pub fn from_rows(rows: &[[u8; GRAPH_SIZE]; GRAPH_SIZE]) -> Self {
        Self {
            size: GRAPH_SIZE,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of nodes (rows = columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `node` is a valid row/column.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.size
    }

    #[inline]
    fn offset(&self, from: NodeId, to: NodeId) -> usize {
        from.index() * self.size + to.index()
    }

    /// Weight of edge `from → to` (0 if absent).
    ///
    /// Panics if either node is out of range.
    #[must_use]
    pub fn weight(&self, from: NodeId, to: NodeId) -> u8 {
        self.cells[self.offset(from, to)]
    }

    /// Overwrite the weight of edge `from → to`.
    pub fn set_weight(&mut self, from: NodeId, to: NodeId, weight: u8) {
        let offset = self.offset(from, to);
        self.cells[offset] = weight;
    }

    /// Outgoing weights of `node`, indexed by destination.
    #[must_use]
    pub fn row(&self, node: NodeId) -> &[u8] {
        let start = node.index() * self.size;
        &self.cells[start..start + self.size]
    }

    /// Incoming weights of `node`, indexed by source.
    pub fn column(&self, node: NodeId) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().skip(node.index()).step_by(self.size).copied()
    }

    /// Nonzero out-edges of `node` in ascending destination order.
    #[must_use]
    pub fn next_nodes(&self, node: NodeId) -> NextNodes {
        self.row(node)
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != 0)
            .map(|(dst, &w)| NextNode {
                node: NodeId(dst as u8),
                points: w,
            })
            .collect()
    }

    /// Whether `node` has no outgoing edges.
    #[must_use]
    pub fn is_sink(&self, node: NodeId) -> bool {
        self.row(node).iter().all(|&w| w == 0)
    }

    /// All nodes with no outgoing edges, ascending.
    #[must_use]
    pub fn sinks(&self) -> Vec<NodeId> {
        NodeId::all(self.size).filter(|&n| self.is_sink(n)).collect()
    }

    /// Set every edge into `column` that weighs exactly `from` to `to`.
    ///
    /// Returns how many edges changed.
    pub fn promote_column(&mut self, column: NodeId, from: u8, to: u8) -> usize {
        let mut changed = 0;
        for row in NodeId::all(self.size) {
            if self.weight(row, column) == from {
                self.set_weight(row, column, to);
                changed += 1;
            }
        }
        changed
    }

    /// Set every existing edge into `column` to `to`, leaving absent edges absent.
    ///
    /// Returns how many edges exist in the column.
    pub fn upgrade_column(&mut self, column: NodeId, to: u8) -> usize {
        let mut upgraded = 0;
        for row in NodeId::all(self.size) {
            if self.weight(row, column) != 0 {
                self.set_weight(row, column, to);
                upgraded += 1;
            }
        }
        upgraded
    }

    /// Copy out as nested rows, for inspection and bindings.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(self.size).map(<[u8]>::to_vec).collect()
    }
}

impl fmt::Display for WeightMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}
