//! One-way pair lookup.
//!
//! Pairs are stored flattened: `[(4, 5), (6, 7)]` becomes `[4, 5, 6, 7]`,
//! so the partner of the node at position `i` sits at position `i ^ 1`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::NodeId;

/// Flattened one-way pairs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneWayPairs {
    flat: SmallVec<[NodeId; 4]>,
}

impl OneWayPairs {
    /// Record a set of pairs.
    #[must_use]
    pub fn new(pairs: &[(NodeId, NodeId)]) -> Self {
        Self {
            flat: pairs.iter().flat_map(|&(a, b)| [a, b]).collect(),
        }
    }

    /// Whether `node` belongs to any pair.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.flat.contains(&node)
    }

    /// The node paired with `node`, if it is a pair member.
    ///
    /// If a node appears in several pairs, its first occurrence wins.
    #[must_use]
    pub fn partner(&self, node: NodeId) -> Option<NodeId> {
        let idx = self.flat.iter().position(|&n| n == node)?;
        self.flat.get(idx ^ 1).copied()
    }

    /// Iterate over the recorded pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.flat.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}
