//! Shared hierarchy handle
//!
//! Serializes every mutation behind one write lock. The ancestor builder reads
//! the parent's table while the write lock is held, so it never observes a
//! half-committed node. Queries take the read lock and may run concurrently
//! with each other, never with a writer.

use crate::index::HierarchyIndex;
use crate::node::{Node, NodeSummary};
use parking_lot::RwLock;
use skilltree_core::{Identity, IndexConfig, NodeId, Result};
use skilltree_guards::{AccessGuard, ControllerGuard};
use std::sync::Arc;

/// Cloneable, thread-safe handle to a [`HierarchyIndex`].
pub struct SharedHierarchy<G> {
    inner: Arc<RwLock<HierarchyIndex<G>>>,
}

impl<G> Clone for SharedHierarchy<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedHierarchy<ControllerGuard> {
    /// Shared index whose only writer is the controller named in `config`.
    pub fn controlled_by(config: IndexConfig) -> Self {
        Self::from_index(HierarchyIndex::controlled_by(config))
    }
}

impl<G: AccessGuard> SharedHierarchy<G> {
    /// Wrap an index (initialized or not).
    pub fn from_index(index: HierarchyIndex<G>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Create the root under the write lock.
    pub fn initialize(&self) -> Result<()> {
        self.inner.write().initialize()
    }

    /// Insert under the write lock.
    pub fn insert_child(&self, parent: NodeId, caller: &Identity) -> Result<NodeId> {
        self.inner.write().insert_child(parent, caller)
    }

    /// See [`HierarchyIndex::get_ancestor_at_distance`].
    pub fn get_ancestor_at_distance(&self, node: NodeId, distance_index: u32) -> Result<NodeId> {
        self.inner.read().get_ancestor_at_distance(node, distance_index)
    }

    /// See [`HierarchyIndex::get_child_at`].
    pub fn get_child_at(&self, node: NodeId, position: u32) -> Result<NodeId> {
        self.inner.read().get_child_at(node, position)
    }

    /// See [`HierarchyIndex::get_descendant_at`].
    pub fn get_descendant_at(&self, node: NodeId, position: u32) -> Result<NodeId> {
        self.inner.read().get_descendant_at(node, position)
    }

    /// See [`HierarchyIndex::node_count`].
    pub fn node_count(&self) -> u64 {
        self.inner.read().node_count()
    }

    /// Copy of a node record.
    pub fn get(&self, node: NodeId) -> Result<Node> {
        self.inner.read().get(node).cloned()
    }

    /// See [`HierarchyIndex::summary`].
    pub fn summary(&self, node: NodeId) -> Result<NodeSummary> {
        self.inner.read().summary(node)
    }

    /// See [`HierarchyIndex::ancestor_at_offset`].
    pub fn ancestor_at_offset(&self, node: NodeId, offset: u64) -> Result<NodeId> {
        self.inner.read().ancestor_at_offset(node, offset)
    }

    /// See [`HierarchyIndex::lowest_common_ancestor`].
    pub fn lowest_common_ancestor(&self, a: NodeId, b: NodeId) -> Result<NodeId> {
        self.inner.read().lowest_common_ancestor(a, b)
    }

    /// Run several queries against one consistent view.
    pub fn read<R>(&self, f: impl FnOnce(&HierarchyIndex<G>) -> R) -> R {
        f(&self.inner.read())
    }
}
