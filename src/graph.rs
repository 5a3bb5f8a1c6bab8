//! Graph accessor types consumed by the search engine.

/// Identifier of a node in a graph's node space.
pub type Node = u32;

/// A single symbol annotating an edge.
pub type Label = char;

/// An outgoing edge: destination node plus the label that spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: Node,
    pub label: Label,
}

/// Read-only view of a directed labeled graph.
///
/// `edges_of` returns `Some(edges)` when the node exists (possibly with no
/// outgoing edges) and `None` when it does not; the two cases are distinct.
/// The edge order must be stable within one call, but no ordering contract
/// beyond that is imposed — under concurrent execution it may influence
/// which of several valid answers the search returns.
///
/// The engine only ever reads through this trait; implementations are free
/// to compute edges on the fly. Any `Fn(Node) -> Option<Vec<Edge>>` closure
/// is an accessor via the blanket impl.
pub trait LabeledGraph {
    fn edges_of(&self, node: Node) -> Option<Vec<Edge>>;
}

impl<F> LabeledGraph for F
where
    F: Fn(Node) -> Option<Vec<Edge>>,
{
    fn edges_of(&self, node: Node) -> Option<Vec<Edge>> {
        self(node)
    }
}
