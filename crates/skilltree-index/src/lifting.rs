//! Level-ancestor and relationship queries over the doubling tables.
//!
//! A hop of `k` levels is decomposed into its set bits; each bit `b` is one
//! lookup of `ancestors[b]`, so every query here is O(log depth) except
//! [`NodeStore::path_to_root`], which lists the whole chain, and the descendant
//! queries of an untracked store, which test every later node.

use crate::node::Node;
use crate::store::NodeStore;
use skilltree_core::{HierarchyError, NodeId, Result};

impl NodeStore {
    /// Ancestor exactly `offset` levels above `node` (`offset == 0` is `node`).
    pub fn ancestor_at_offset(&self, node: NodeId, offset: u64) -> Result<NodeId> {
        let depth = self.get(node)?.depth;
        if offset > depth {
            return Err(HierarchyError::IndexOutOfRange {
                node,
                index: offset,
                len: depth + 1,
            });
        }

        let mut cursor = node;
        let mut remaining = offset;
        while remaining != 0 {
            let bit = remaining.trailing_zeros() as usize;
            let table = &self.get(cursor)?.ancestors;
            cursor = table
                .get(bit)
                .copied()
                .ok_or_else(|| HierarchyError::out_of_range(cursor, bit as u64, table.len()))?;
            remaining &= remaining - 1;
        }
        Ok(cursor)
    }

    /// Returns `true` if `ancestor` lies strictly above `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool> {
        let ancestor_depth = self.get(ancestor)?.depth;
        let node_depth = self.get(node)?.depth;
        if ancestor_depth >= node_depth {
            return Ok(false);
        }
        Ok(self.ancestor_at_offset(node, node_depth - ancestor_depth)? == ancestor)
    }

    /// Deepest node that is an ancestor-or-self of both `a` and `b`.
    pub fn lowest_common_ancestor(&self, a: NodeId, b: NodeId) -> Result<NodeId> {
        let depth_a = self.get(a)?.depth;
        let depth_b = self.get(b)?.depth;

        let (mut x, mut y) = if depth_a >= depth_b {
            (self.ancestor_at_offset(a, depth_a - depth_b)?, b)
        } else {
            (a, self.ancestor_at_offset(b, depth_b - depth_a)?)
        };
        if x == y {
            return Ok(x);
        }

        // Same depth from here on, so both tables have the same length.
        let levels = self.get(x)?.ancestors.len();
        for level in (0..levels).rev() {
            let up_x = self.get(x)?.ancestors.get(level).copied();
            let up_y = self.get(y)?.ancestors.get(level).copied();
            if let (Some(up_x), Some(up_y)) = (up_x, up_y) {
                if up_x != up_y {
                    x = up_x;
                    y = up_y;
                }
            }
        }

        self.get(x)?
            .parent()
            .ok_or(HierarchyError::IndexOutOfRange {
                node: x,
                index: 0,
                len: 0,
            })
    }

    /// Number of nodes created below `node`.
    pub fn descendant_count(&self, node: NodeId) -> Result<u64> {
        let record = self.get(node)?;
        if self.tracks_descendants() {
            return Ok(record.descendants.len() as u64);
        }
        Ok(self.scan_descendants(record).count() as u64)
    }

    /// Descendant of `node` at `position`, in arrival order.
    pub fn descendant_at(&self, node: NodeId, position: u64) -> Result<NodeId> {
        let record = self.get(node)?;
        let found = usize::try_from(position).ok().and_then(|position| {
            if self.tracks_descendants() {
                record.descendants.get(position).copied()
            } else {
                self.scan_descendants(record).nth(position)
            }
        });
        found.ok_or_else(|| {
            let len = self.descendant_count(node).unwrap_or_default();
            HierarchyError::IndexOutOfRange {
                node,
                index: position,
                len,
            }
        })
    }

    /// Later nodes whose level-ancestor at the right offset is `root`.
    ///
    /// Identifiers are handed out in arrival order, so only nodes after `root`
    /// can lie below it.
    fn scan_descendants<'a>(&'a self, root: &'a Node) -> impl Iterator<Item = NodeId> + 'a {
        self.iter()
            .skip_while(move |candidate| candidate.id <= root.id)
            .filter(move |candidate| {
                candidate.depth > root.depth
                    && self
                        .ancestor_at_offset(candidate.id, candidate.depth - root.depth)
                        .is_ok_and(|above| above == root.id)
            })
            .map(|candidate| candidate.id)
    }

    /// Parent chain of `node`, nearest first, ending at the root.
    pub fn path_to_root(&self, node: NodeId) -> Result<Vec<NodeId>> {
        let start = self.get(node)?;
        let mut path = Vec::with_capacity(start.depth as usize);
        let mut cursor = start.parent();
        while let Some(id) = cursor {
            path.push(id);
            cursor = self.get(id)?.parent();
        }
        Ok(path)
    }
}
