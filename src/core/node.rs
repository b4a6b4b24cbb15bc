//! Node identification.
//!
//! Nodes have no identity beyond their position in the weight matrix:
//! `NodeId(3)` is row and column 3.

use serde::{Deserialize, Serialize};

/// Node identifier, 0-based. Node 0 is where every game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct NodeId(pub u8);

impl NodeId {
    /// The start node of every game.
    pub const START: NodeId = NodeId(0);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw node index (row/column in the weight matrix).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the start node.
    #[must_use]
    pub const fn is_start(self) -> bool {
        self.0 == 0
    }

    /// Iterate over all node IDs for a graph with `graph_size` nodes.
    ///
    /// ```
    /// use graph_game::core::NodeId;
    ///
    /// let nodes: Vec<_> = NodeId::all(11).collect();
    /// assert_eq!(nodes.len(), 11);
    /// assert_eq!(nodes[10], NodeId::new(10));
    /// ```
    pub fn all(graph_size: usize) -> impl Iterator<Item = NodeId> {
        (0..graph_size as u8).map(NodeId)
    }
}

impl From<u8> for NodeId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_index() {
        assert_eq!(NodeId::new(7).index(), 7);
        assert!(NodeId::START.is_start());
        assert!(!NodeId::new(1).is_start());
    }

    #[test]
    fn test_node_ordering() {
        let mut nodes = vec![NodeId(5), NodeId(2), NodeId(9)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId(2), NodeId(5), NodeId(9)]);
    }
}
