//! Human-readable and JSON rendering of hierarchy nodes.

use serde::Serialize;
use skilltree_core::{NodeId, Result};
use skilltree_guards::AccessGuard;
use skilltree_index::{HierarchyIndex, Node};
use std::fmt::Write as _;

/// Serializable view of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeReport {
    /// Node identifier
    pub id: NodeId,
    /// Parent hops to the root
    pub depth: u64,
    /// Direct parent
    pub parent: Option<NodeId>,
    /// `(distance, ancestor)` pairs, distance a power of two
    pub ancestors: Vec<(u64, NodeId)>,
    /// Direct children in insertion order
    pub children: Vec<NodeId>,
    /// Nodes anywhere below this one
    pub descendant_count: u64,
}

impl NodeReport {
    /// Report for `node`, which has `descendant_count` nodes below it.
    pub fn new(node: &Node, descendant_count: u64) -> Self {
        Self {
            id: node.id,
            depth: node.depth,
            parent: node.parent(),
            ancestors: node
                .ancestors
                .iter()
                .enumerate()
                .map(|(level, &ancestor)| (1u64 << level, ancestor))
                .collect(),
            children: node.children.clone(),
            descendant_count,
        }
    }

    /// One-line summary.
    pub fn render(&self) -> String {
        let mut line = format!("{} depth={}", self.id, self.depth);
        if let Some(parent) = self.parent {
            let _ = write!(line, " parent={parent}");
        }
        if !self.ancestors.is_empty() {
            let table: Vec<String> = self
                .ancestors
                .iter()
                .map(|(distance, ancestor)| format!("{distance}:{}", ancestor.value()))
                .collect();
            let _ = write!(line, " ancestors=[{}]", table.join(" "));
        }
        let _ = write!(
            line,
            " children={} descendants={}",
            self.children.len(),
            self.descendant_count
        );
        line
    }
}

/// Reports for every node of an initialized index.
pub fn node_reports<G: AccessGuard>(index: &HierarchyIndex<G>) -> Result<Vec<NodeReport>> {
    index
        .nodes()?
        .map(|node| Ok(NodeReport::new(node, index.descendant_count(node.id)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltree_core::{Identity, IndexConfig};

    #[test]
    fn report_lists_power_of_two_distances() {
        let mut index = HierarchyIndex::controlled_by(IndexConfig::with_controller("c"));
        index.initialize().unwrap();
        let caller = Identity::new("c");
        let mut parent = NodeId::ROOT;
        for _ in 0..5 {
            parent = index.insert_child(parent, &caller).unwrap();
        }

        let reports = node_reports(&index).unwrap();
        let deepest = &reports[5];
        assert_eq!(
            deepest.ancestors,
            vec![(1, NodeId::new(4)), (2, NodeId::new(3)), (4, NodeId::new(1))]
        );
        assert_eq!(
            deepest.render(),
            "Skill#5 depth=5 parent=Skill#4 ancestors=[1:4 2:3 4:1] children=0 descendants=0"
        );
        assert_eq!(
            reports[0].render(),
            "Skill#0 depth=0 children=1 descendants=5"
        );
    }
}
