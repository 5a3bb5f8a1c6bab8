//! Membership check: does a concrete label sequence spell a walk?

use crate::graph::{Label, LabeledGraph, Node};

/// Check whether `seq` spells a walk from `current` to `target` in `g`.
///
/// The node lookup happens before the empty-sequence base case: a walk can
/// never start at a node the graph does not contain, not even the empty walk.
/// Graphs may be nondeterministic — several edges out of one node may share
/// a label — so every matching edge is tried until one continuation reaches
/// the target. Cycles are fine: the sequence shrinks on every recursion.
pub fn spells_walk<G>(g: &G, current: Node, target: Node, seq: &[Label]) -> bool
where
    G: LabeledGraph + ?Sized,
{
    let Some(edges) = g.edges_of(current) else {
        return false;
    };
    let Some((&first, rest)) = seq.split_first() else {
        return current == target;
    };
    edges
        .iter()
        .filter(|e| e.label == first)
        .any(|e| spells_walk(g, e.to, target, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn edge(to: Node, label: Label) -> Edge {
        Edge { to, label }
    }

    /// 0 --a--> 1, 0 --a--> 2, 1 --b--> 1 (self loop), 2 --c--> 0
    fn graph(node: Node) -> Option<Vec<Edge>> {
        match node {
            0 => Some(vec![edge(1, 'a'), edge(2, 'a')]),
            1 => Some(vec![edge(1, 'b')]),
            2 => Some(vec![edge(2, 'c')]),
            _ => None,
        }
    }

    #[test]
    fn test_empty_sequence_requires_equality() {
        assert!(spells_walk(&graph, 0, 0, &[]));
        assert!(!spells_walk(&graph, 0, 1, &[]));
    }

    #[test]
    fn test_empty_sequence_fails_on_missing_node() {
        // Node 9 does not exist, so even the trivial walk 9 -> 9 fails.
        assert!(!spells_walk(&graph, 9, 9, &[]));
    }

    #[test]
    fn test_single_step() {
        assert!(spells_walk(&graph, 0, 1, &['a']));
        assert!(!spells_walk(&graph, 0, 1, &['b']));
    }

    #[test]
    fn test_nondeterministic_edges_share_label() {
        // Both 'a' edges from 0 are tried; only one continues with 'c'.
        assert!(spells_walk(&graph, 0, 2, &['a', 'c']));
        // ...and only the other continues with 'b'.
        assert!(spells_walk(&graph, 0, 1, &['a', 'b']));
    }

    #[test]
    fn test_cycle_terminates() {
        assert!(spells_walk(&graph, 1, 1, &['b', 'b', 'b', 'b', 'b']));
        assert!(!spells_walk(&graph, 1, 0, &['b', 'b', 'b']));
    }

    #[test]
    fn test_dead_end_mid_sequence() {
        // 0 --a--> 1 --b--> 1 has no 'c' continuation.
        assert!(!spells_walk(&graph, 0, 0, &['a', 'c']));
    }
}
