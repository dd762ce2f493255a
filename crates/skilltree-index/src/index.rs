//! Hierarchy index
//!
//! The public face of the crate: a node store plus the access guard that gates
//! every insertion. The index moves from `Uninitialized` to `Active` exactly
//! once, when [`HierarchyIndex::initialize`] creates the root.
//!
//! # Insertion protocol
//!
//! 1. the index must be active (`NotInitialized`)
//! 2. the access guard must accept the caller (`Unauthorized`)
//! 3. the parent must exist (`ParentNotFound`)
//! 4. the ancestor table is derived from the parent's committed table
//! 5. the node is allocated and linked under its parent
//!
//! Steps 1-4 only read, and step 5 cannot fail once they pass, so a rejected
//! insertion leaves the hierarchy exactly as it was.

use crate::ancestors::build_ancestor_table;
use crate::node::{Node, NodeSummary};
use crate::store::NodeStore;
use skilltree_core::{HierarchyError, Identity, IndexConfig, NodeId, Result};
use skilltree_guards::{AccessGuard, ControllerGuard};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
enum IndexState {
    Uninitialized,
    Active(NodeStore),
}

/// Append-only skill hierarchy gated by an [`AccessGuard`].
#[derive(Debug, Clone)]
pub struct HierarchyIndex<G> {
    guard: G,
    config: IndexConfig,
    state: IndexState,
}

impl HierarchyIndex<ControllerGuard> {
    /// Index whose only writer is the controller named in `config`.
    pub fn controlled_by(config: IndexConfig) -> Self {
        let guard = ControllerGuard::from_config(&config);
        Self::with_config(guard, config)
    }
}

impl<G: AccessGuard> HierarchyIndex<G> {
    /// Uninitialized index with default configuration.
    pub fn new(guard: G) -> Self {
        Self::with_config(guard, IndexConfig::default())
    }

    /// Uninitialized index with explicit configuration.
    pub fn with_config(guard: G, config: IndexConfig) -> Self {
        Self {
            guard,
            config,
            state: IndexState::Uninitialized,
        }
    }

    /// Create the root. Valid exactly once.
    pub fn initialize(&mut self) -> Result<()> {
        if let IndexState::Active(_) = self.state {
            warn!("hierarchy initialize called twice");
            return Err(HierarchyError::AlreadyInitialized);
        }
        let mut store = NodeStore::with_config(&self.config);
        store.create_root()?;
        self.state = IndexState::Active(store);
        debug!(
            track_descendants = self.config.track_descendants,
            "hierarchy initialized"
        );
        Ok(())
    }

    /// Returns `true` once the root exists.
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, IndexState::Active(_))
    }

    /// Insert a new node under `parent` on behalf of `caller`.
    pub fn insert_child(&mut self, parent: NodeId, caller: &Identity) -> Result<NodeId> {
        let store = match &mut self.state {
            IndexState::Active(store) => store,
            IndexState::Uninitialized => return Err(HierarchyError::NotInitialized),
        };

        let decision = self.guard.check(caller);
        if let Some(reason) = decision.denial_reason() {
            warn!(caller = %caller, parent = %parent, %reason, "insertion rejected by access guard");
            return Err(HierarchyError::unauthorized(caller));
        }

        let ancestors = build_ancestor_table(&*store, parent).map_err(|err| {
            warn!(caller = %caller, parent = %parent, "insertion under unknown parent");
            err
        })?;
        let levels = ancestors.len();
        let id = store.allocate(parent, ancestors)?;

        debug!(node = %id, parent = %parent, levels, "skill inserted");
        Ok(id)
    }

    /// Ancestor at distance `2^distance_index` from `node`.
    pub fn get_ancestor_at_distance(&self, node: NodeId, distance_index: u32) -> Result<NodeId> {
        let record = self.get(node)?;
        record
            .ancestors
            .get(distance_index as usize)
            .copied()
            .ok_or_else(|| {
                HierarchyError::out_of_range(node, u64::from(distance_index), record.ancestors.len())
            })
    }

    /// Direct child of `node` at `position`, in insertion order.
    pub fn get_child_at(&self, node: NodeId, position: u32) -> Result<NodeId> {
        let record = self.get(node)?;
        record
            .children
            .get(position as usize)
            .copied()
            .ok_or_else(|| {
                HierarchyError::out_of_range(node, u64::from(position), record.children.len())
            })
    }

    /// Descendant of `node` at `position`, in insertion order.
    pub fn get_descendant_at(&self, node: NodeId, position: u32) -> Result<NodeId> {
        self.store()?.descendant_at(node, u64::from(position))
    }

    /// Number of direct children of `node`.
    pub fn child_count(&self, node: NodeId) -> Result<u64> {
        Ok(self.get(node)?.children.len() as u64)
    }

    /// Number of nodes below `node`.
    pub fn descendant_count(&self, node: NodeId) -> Result<u64> {
        self.store()?.descendant_count(node)
    }

    /// Total nodes including the root; zero before initialization.
    pub fn node_count(&self) -> u64 {
        match &self.state {
            IndexState::Active(store) => store.len(),
            IndexState::Uninitialized => 0,
        }
    }

    /// Full node record.
    pub fn get(&self, node: NodeId) -> Result<&Node> {
        self.store()?.get(node)
    }

    /// Depth and child counts of `node`.
    pub fn summary(&self, node: NodeId) -> Result<NodeSummary> {
        self.store()?.summary(node)
    }

    /// Ancestor exactly `offset` levels above `node`.
    pub fn ancestor_at_offset(&self, node: NodeId, offset: u64) -> Result<NodeId> {
        self.store()?.ancestor_at_offset(node, offset)
    }

    /// Returns `true` if `ancestor` lies strictly above `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool> {
        self.store()?.is_ancestor(ancestor, node)
    }

    /// Deepest common ancestor-or-self of `a` and `b`.
    pub fn lowest_common_ancestor(&self, a: NodeId, b: NodeId) -> Result<NodeId> {
        self.store()?.lowest_common_ancestor(a, b)
    }

    /// Parent chain of `node` up to the root.
    pub fn path_to_root(&self, node: NodeId) -> Result<Vec<NodeId>> {
        self.store()?.path_to_root(node)
    }

    /// Every node in identifier order.
    pub fn nodes(&self) -> Result<impl Iterator<Item = &Node>> {
        Ok(self.store()?.iter())
    }

    /// The guard consulted on insertion.
    pub fn guard(&self) -> &G {
        &self.guard
    }

    /// Configuration the index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    fn store(&self) -> Result<&NodeStore> {
        match &self.state {
            IndexState::Active(store) => Ok(store),
            IndexState::Uninitialized => Err(HierarchyError::NotInitialized),
        }
    }
}
