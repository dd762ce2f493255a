//! Property tests for doubling ancestor tables
//!
//! Random trees are grown by picking each new node's parent uniformly from the
//! nodes that already exist, then every table is checked against a naive
//! parent-pointer walk.

use proptest::prelude::*;
use skilltree_core::{Identity, IndexConfig, NodeId};
use skilltree_guards::ControllerGuard;
use skilltree_index::{table_len, HierarchyIndex};

const COLONY: &str = "common-colony";

/// Parent picks: entry `i` selects the parent of node `i + 1` modulo `i + 1`.
fn arb_picks() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(any::<u64>(), 1..120)
}

/// Grow a tree and return it with the recorded parent of every node.
fn grow(picks: &[u64]) -> (HierarchyIndex<ControllerGuard>, Vec<Option<NodeId>>) {
    let mut index = HierarchyIndex::controlled_by(IndexConfig::with_controller(COLONY));
    index.initialize().unwrap();
    let caller = Identity::new(COLONY);

    let mut parents = vec![None];
    for (i, pick) in picks.iter().enumerate() {
        let parent = NodeId::new(pick % (i as u64 + 1));
        let child = index.insert_child(parent, &caller).unwrap();
        assert_eq!(child, NodeId::new(i as u64 + 1));
        parents.push(Some(parent));
    }
    (index, parents)
}

fn naive_ancestor(parents: &[Option<NodeId>], node: NodeId, hops: u64) -> Option<NodeId> {
    let mut cursor = node;
    for _ in 0..hops {
        cursor = parents[cursor.value() as usize]?;
    }
    Some(cursor)
}

fn naive_depth(parents: &[Option<NodeId>], node: NodeId) -> u64 {
    let mut depth = 0;
    let mut cursor = node;
    while let Some(parent) = parents[cursor.value() as usize] {
        depth += 1;
        cursor = parent;
    }
    depth
}

proptest! {
    /// ancestors[0] is always the id passed to insert_child
    #[test]
    fn direct_parent_is_recorded(picks in arb_picks()) {
        let (index, parents) = grow(&picks);
        for (raw, parent) in parents.iter().enumerate().skip(1) {
            let node = NodeId::new(raw as u64);
            prop_assert_eq!(Some(index.get_ancestor_at_distance(node, 0).unwrap()), *parent);
        }
    }

    /// anc(n, i) == anc(anc(n, i - 1), i - 1)
    #[test]
    fn doubling_recurrence_holds(picks in arb_picks()) {
        let (index, _) = grow(&picks);
        for node in index.nodes().unwrap() {
            for level in 1..node.ancestors.len() as u32 {
                let half = index.get_ancestor_at_distance(node.id, level - 1).unwrap();
                let expected = index.get_ancestor_at_distance(half, level - 1).unwrap();
                prop_assert_eq!(index.get_ancestor_at_distance(node.id, level).unwrap(), expected);
            }
        }
    }

    /// Table entries sit at power-of-two distances and the table is exactly as long as the depth allows
    #[test]
    fn tables_match_naive_walk(picks in arb_picks()) {
        let (index, parents) = grow(&picks);
        for node in index.nodes().unwrap() {
            prop_assert_eq!(node.depth, naive_depth(&parents, node.id));
            prop_assert_eq!(node.ancestors.len(), table_len(node.depth));
            for (level, &ancestor) in node.ancestors.iter().enumerate() {
                prop_assert_eq!(Some(ancestor), naive_ancestor(&parents, node.id, 1 << level));
            }
        }
    }

    /// Level-ancestor queries agree with walking parent pointers
    #[test]
    fn offsets_match_naive_walk(picks in arb_picks(), salt in any::<u64>()) {
        let (index, parents) = grow(&picks);
        let node = NodeId::new(salt % index.node_count());
        let depth = index.get(node).unwrap().depth;
        for offset in 0..=depth {
            prop_assert_eq!(
                Some(index.ancestor_at_offset(node, offset).unwrap()),
                naive_ancestor(&parents, node, offset)
            );
        }
        prop_assert!(index.ancestor_at_offset(node, depth + 1).is_err());
    }

    /// LCA agrees with intersecting the two root paths
    #[test]
    fn lca_matches_naive(picks in arb_picks(), a in any::<u64>(), b in any::<u64>()) {
        let (index, parents) = grow(&picks);
        let a = NodeId::new(a % index.node_count());
        let b = NodeId::new(b % index.node_count());

        let mut path_a = vec![a];
        path_a.extend(index.path_to_root(a).unwrap());
        let mut cursor = Some(b);
        let expected = loop {
            let Some(node) = cursor else { break NodeId::ROOT };
            if path_a.contains(&node) {
                break node;
            }
            cursor = parents[node.value() as usize];
        };

        prop_assert_eq!(index.lowest_common_ancestor(a, b).unwrap(), expected);
    }

    /// Every node appears exactly once among its parent's children, and descendant counts add up
    #[test]
    fn child_and_descendant_lists_are_consistent(picks in arb_picks()) {
        let (index, parents) = grow(&picks);
        let mut expected_descendants = vec![0u64; parents.len()];
        for raw in 1..parents.len() {
            let node = NodeId::new(raw as u64);
            let mut cursor = parents[raw];
            while let Some(ancestor) = cursor {
                expected_descendants[ancestor.value() as usize] += 1;
                cursor = parents[ancestor.value() as usize];
            }
            let parent = parents[raw].unwrap();
            let siblings = &index.get(parent).unwrap().children;
            prop_assert_eq!(siblings.iter().filter(|&&c| c == node).count(), 1);
        }
        for node in index.nodes().unwrap() {
            prop_assert_eq!(
                index.descendant_count(node.id).unwrap(),
                expected_descendants[node.id.value() as usize]
            );
        }
    }
}
