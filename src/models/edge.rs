//! Edge records and per-vertex traversal state.
//!
//! Vertices have no struct of their own: a vertex is a dense zero-based
//! index, and any per-vertex data (labels, status) lives in parallel
//! arrays indexed by it.

use serde::{Deserialize, Serialize};

/// Vertex identifier: a dense index in `[0, vertex_count)`.
pub type VertexId = usize;

/// Capability of an edge record: exposing its endpoints.
///
/// Traversal algorithms and the CSR builder are generic over this trait so
/// that weighted and unweighted edges share one code path.
pub trait EdgeRecord: Copy {
    /// Source vertex.
    fn src(&self) -> VertexId;
    /// Destination vertex.
    fn dst(&self) -> VertexId;
}

/// An unweighted directed edge.
///
/// Equality, ordering and hashing are structural over `(src, dst)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex.
    pub src: VertexId,
    /// Destination vertex.
    pub dst: VertexId,
}

impl Edge {
    /// Create a new edge.
    pub const fn new(src: VertexId, dst: VertexId) -> Self {
        Edge { src, dst }
    }
}

impl EdgeRecord for Edge {
    fn src(&self) -> VertexId {
        self.src
    }

    fn dst(&self) -> VertexId {
        self.dst
    }
}

/// A directed edge carrying a weight.
///
/// Ordering is lexicographic over `(src, dst, weight)` whenever the weight
/// type supports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeightedEdge<W> {
    /// Source vertex.
    pub src: VertexId,
    /// Destination vertex.
    pub dst: VertexId,
    /// Edge weight.
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    /// Create a new weighted edge.
    pub const fn new(src: VertexId, dst: VertexId, weight: W) -> Self {
        WeightedEdge { src, dst, weight }
    }
}

impl<W: Copy> EdgeRecord for WeightedEdge<W> {
    fn src(&self) -> VertexId {
        self.src
    }

    fn dst(&self) -> VertexId {
        self.dst
    }
}

/// Per-vertex state during one traversal call.
///
/// This is transient: every traversal allocates its own status array and
/// drops it on return. Nothing is persisted on the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexStatus {
    /// Not reached yet.
    Undiscovered,
    /// On the DFS path, children being expanded (postorder frontier).
    Visited,
    /// Finalized and emitted.
    Discovered,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn edge_ordering_is_lexicographic() {
        let mut edges = vec![Edge::new(1, 0), Edge::new(0, 2), Edge::new(0, 1)];
        edges.sort();
        assert_eq!(
            edges,
            vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 0)]
        );
    }

    #[test]
    fn weighted_edge_ordering_breaks_ties_on_weight() {
        let a = WeightedEdge::new(0, 1, 5u32);
        let b = WeightedEdge::new(0, 1, 7u32);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn edges_are_usable_as_hash_keys() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Edge::new(0, 1)));
        assert!(seen.insert(Edge::new(1, 0)));
        assert!(!seen.insert(Edge::new(0, 1)));
    }
}
