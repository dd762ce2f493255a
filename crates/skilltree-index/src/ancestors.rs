//! Doubling ancestor tables
//!
//! A node at depth `d` stores the ancestors at distances `1, 2, 4, ..`, up to
//! the largest power of two not exceeding `d`. The table of a new node is
//! derived from tables that are already committed:
//!
//! ```text
//! table[0] = parent
//! table[i] = table_of(table[i - 1])[i - 1]    (i >= 1)
//! ```
//!
//! i.e. the ancestor `2^i` up is the ancestor `2^(i-1)` up from the ancestor
//! `2^(i-1)` up. The recurrence stops at the first level the intermediate
//! ancestor cannot answer, which is exactly where `2^i` exceeds the new depth.
//! Building a table costs O(log depth) lookups.

use skilltree_core::{HierarchyError, NodeId, Result};

/// Read-only view of committed ancestor tables.
pub trait AncestorSource {
    /// Ancestor table of `node`, or `None` if it does not exist.
    fn ancestors_of(&self, node: NodeId) -> Option<&[NodeId]>;

    /// Number of committed nodes.
    fn node_count(&self) -> u64;
}

/// Compute the ancestor table for a new child of `parent`.
///
/// Fails with `ParentNotFound` if `parent` is not in `source`.
pub fn build_ancestor_table<S>(source: &S, parent: NodeId) -> Result<Vec<NodeId>>
where
    S: AncestorSource + ?Sized,
{
    let parent_table =
        source
            .ancestors_of(parent)
            .ok_or_else(|| HierarchyError::ParentNotFound {
                parent,
                node_count: source.node_count(),
            })?;

    // The child's table is at most one entry longer than its parent's.
    let mut table = Vec::with_capacity(parent_table.len() + 1);
    table.push(parent);

    loop {
        let level = table.len() - 1;
        let hop = table[level];
        match source.ancestors_of(hop).and_then(|t| t.get(level)) {
            Some(&next) => table.push(next),
            None => break,
        }
    }

    Ok(table)
}

/// Length of the ancestor table of a node at `depth`.
pub fn table_len(depth: u64) -> usize {
    if depth == 0 {
        0
    } else {
        (u64::BITS - depth.leading_zeros()) as usize
    }
}
