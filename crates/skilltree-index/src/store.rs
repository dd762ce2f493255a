//! Node store
//!
//! An arena of [`Node`] records indexed by sequential identifier. Nothing is
//! ever removed or re-parented, so identifiers double as arena positions and
//! no pointer structure is needed.

use crate::ancestors::AncestorSource;
use crate::node::{Node, NodeSummary};
use skilltree_core::{HierarchyError, IndexConfig, NodeId, Result};

/// Owner of every node record.
#[derive(Debug, Clone)]
pub struct NodeStore {
    nodes: Vec<Node>,
    track_descendants: bool,
}

impl NodeStore {
    /// Empty store that leaves descendant lists unmaterialised.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            track_descendants: false,
        }
    }

    /// Empty store sized and configured from `config`.
    pub fn with_config(config: &IndexConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.capacity_hint),
            track_descendants: config.track_descendants,
        }
    }

    /// Allocate the root. Only valid on an empty store.
    pub fn create_root(&mut self) -> Result<NodeId> {
        if !self.nodes.is_empty() {
            return Err(HierarchyError::AlreadyInitialized);
        }
        self.nodes.push(Node::root());
        Ok(NodeId::ROOT)
    }

    /// Look up a node record.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        id.as_index()
            .and_then(|index| self.nodes.get(index))
            .ok_or(HierarchyError::NodeNotFound {
                node: id,
                node_count: self.len(),
            })
    }

    /// Depth plus child and descendant counts of `id`.
    pub fn summary(&self, id: NodeId) -> Result<NodeSummary> {
        let node = self.get(id)?;
        Ok(NodeSummary {
            id,
            depth: node.depth,
            child_count: node.children.len() as u64,
            descendant_count: self.descendant_count(id)?,
        })
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> u64 {
        self.nodes.len() as u64
    }

    /// Returns `true` before the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns `true` if new nodes are recorded on their ancestors' descendant lists.
    pub fn tracks_descendants(&self) -> bool {
        self.track_descendants
    }

    /// Commit a new node under `parent` with a precomputed ancestor table.
    ///
    /// `ancestors[0]` must be `parent`. Every check runs before the first
    /// write, so a failed call leaves the store untouched.
    pub fn allocate(&mut self, parent: NodeId, ancestors: Vec<NodeId>) -> Result<NodeId> {
        let parent_index = match parent.as_index() {
            Some(index) if index < self.nodes.len() => index,
            _ => {
                return Err(HierarchyError::ParentNotFound {
                    parent,
                    node_count: self.len(),
                })
            }
        };
        debug_assert_eq!(ancestors.first(), Some(&parent));

        let id = NodeId::new(self.len());
        let depth = self.nodes[parent_index].depth + 1;

        if self.track_descendants {
            let mut cursor = Some(parent_index);
            while let Some(index) = cursor {
                let node = &mut self.nodes[index];
                node.descendants.push(id);
                cursor = node.parent().and_then(NodeId::as_index);
            }
        }
        self.nodes[parent_index].children.push(id);

        self.nodes.push(Node {
            id,
            depth,
            children: Vec::new(),
            descendants: Vec::new(),
            ancestors,
        });
        Ok(id)
    }
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AncestorSource for NodeStore {
    fn ancestors_of(&self, node: NodeId) -> Option<&[NodeId]> {
        self.get(node).ok().map(|n| n.ancestors.as_slice())
    }

    fn node_count(&self) -> u64 {
        self.len()
    }
}
