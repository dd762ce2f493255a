//! Node records held by the store.

use serde::{Deserialize, Serialize};
use skilltree_core::NodeId;

/// One skill in the hierarchy.
///
/// All three lists only ever grow. `ancestors[i]` is the ancestor at distance
/// `2^i`, so `ancestors[0]` is the direct parent and the root's list is empty.
/// `descendants` is only filled when the store tracks descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Sequential identifier
    pub id: NodeId,
    /// Parent hops to the root
    pub depth: u64,
    /// Direct children in arrival order
    pub children: Vec<NodeId>,
    /// Every node created below this one, in arrival order, if tracked
    pub descendants: Vec<NodeId>,
    /// Doubling ancestor table
    pub ancestors: Vec<NodeId>,
}

impl Node {
    /// The depth-0 node with empty lists.
    pub fn root() -> Self {
        Self {
            id: NodeId::ROOT,
            depth: 0,
            children: Vec::new(),
            descendants: Vec::new(),
            ancestors: Vec::new(),
        }
    }

    /// Direct parent, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.ancestors.first().copied()
    }

    /// Returns `true` for the depth-0 node.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

/// Counts describing a node's position in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSummary {
    /// Node identifier
    pub id: NodeId,
    /// Number of ancestors (parent hops to the root)
    pub depth: u64,
    /// Number of direct children
    pub child_count: u64,
    /// Number of nodes anywhere below this one
    pub descendant_count: u64,
}
