//! Compressed Sparse Row (CSR) adjacency structure.
//!
//! Memory layout:
//! - `offsets[v]` = starting index in `edges` for vertex `v`'s outgoing edges
//! - `edges[offsets[v]..offsets[v + 1]]` = outgoing edges of `v`, ascending dst
//! - `directed` = informational flag, consumed by rendering only
//!
//! The structure is immutable after construction; rebuilding means
//! constructing a new instance.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::edge::{EdgeRecord, VertexId};
use crate::{GraphError, Result};

/// Capability of a graph exposing CSR-style adjacency ranges.
///
/// Traversal algorithms are generic over this trait (static dispatch), so
/// alternative adjacency layouts can reuse them unchanged.
pub trait AdjacencyGraph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;
    /// Number of edges.
    fn edge_count(&self) -> usize;
    /// Half-open range of flat edge indices belonging to `v`.
    ///
    /// Callers must ensure `v < vertex_count()`.
    fn edge_range(&self, v: VertexId) -> Range<usize>;
    /// Destination of the edge at flat index `i`.
    ///
    /// Callers must ensure `i < edge_count()`.
    fn edge_dst(&self, i: usize) -> VertexId;

    /// Whether `v` has no outgoing edges.
    fn is_sink(&self, v: VertexId) -> bool {
        self.edge_range(v).is_empty()
    }
}

/// An immutable directed (or undirected) graph in CSR form.
///
/// For a graph with N vertices and M edges:
/// - `offsets`: N+1 elements, non-decreasing, `offsets[0] = 0`,
///   `offsets[N] = M`
/// - `edges`: M edge records grouped by ascending source id
///
/// Two graphs are equal iff their directedness flag, offsets and edge
/// sequences are all equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrGraph<E> {
    #[serde(rename = "is_directed")]
    directed: bool,
    #[serde(rename = "vertexes", default)]
    offsets: Vec<usize>,
    #[serde(default = "Vec::new")]
    edges: Vec<E>,
}

impl<E: EdgeRecord> CsrGraph<E> {
    /// Build a CSR graph from an edge list pre-sorted by `(src, dst)`.
    ///
    /// Vertices without outgoing edges still occupy a zero-width slot in
    /// the offset array. The build is a histogram pass over the edges plus
    /// a prefix sum, O(M + N).
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnsortedEdges`] if the input violates the sort
    ///   precondition
    /// - [`GraphError::VertexOutOfRange`] if any endpoint is `>= n`
    pub fn from_sorted_edges(edges: Vec<E>, n: usize, directed: bool) -> Result<Self> {
        for (i, pair) in edges.windows(2).enumerate() {
            let key = |e: &E| (e.src(), e.dst());
            if key(&pair[0]) > key(&pair[1]) {
                return Err(GraphError::UnsortedEdges(i + 1));
            }
        }
        for e in &edges {
            if e.src() >= n {
                return Err(GraphError::VertexOutOfRange(e.src()));
            }
            if e.dst() >= n {
                return Err(GraphError::VertexOutOfRange(e.dst()));
            }
        }

        let mut offsets = vec![0usize; n + 1];
        for e in &edges {
            offsets[e.src() + 1] += 1;
        }
        for v in 0..n {
            offsets[v + 1] += offsets[v];
        }

        debug!(vertices = n, edges = edges.len(), directed, "built CSR graph");
        Ok(CsrGraph {
            directed,
            offsets,
            edges,
        })
    }

    /// Adopt pre-built CSR arrays.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidCsr`] if the arrays violate any CSR invariant.
    pub fn from_parts(offsets: Vec<usize>, edges: Vec<E>, directed: bool) -> Result<Self> {
        let g = CsrGraph {
            directed,
            offsets,
            edges,
        };
        g.validate()?;
        Ok(g)
    }

    /// Re-check every structural invariant of the graph.
    ///
    /// Used after adopting foreign arrays and after decoding a serialized
    /// graph.
    pub fn validate(&self) -> Result<()> {
        if self.offsets.is_empty() {
            return Err(GraphError::InvalidCsr(
                "offsets must have length n + 1".to_string(),
            ));
        }
        if self.offsets[0] != 0 {
            return Err(GraphError::InvalidCsr(format!(
                "offsets[0] = {}, expected 0",
                self.offsets[0]
            )));
        }
        for (v, pair) in self.offsets.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(GraphError::InvalidCsr(format!(
                    "offsets not monotonic at index {v}"
                )));
            }
        }
        let last = *self.offsets.last().unwrap_or(&0);
        if last != self.edges.len() {
            return Err(GraphError::InvalidCsr(format!(
                "offsets[-1] = {} != edges.len() = {}",
                last,
                self.edges.len()
            )));
        }

        let n = self.offsets.len() - 1;
        for (i, e) in self.edges.iter().enumerate() {
            if e.src() >= n || e.dst() >= n {
                return Err(GraphError::InvalidCsr(format!(
                    "edge {} -> {} out of bounds for n = {}",
                    e.src(),
                    e.dst(),
                    n
                )));
            }
            if i < self.offsets[e.src()] || i >= self.offsets[e.src() + 1] {
                return Err(GraphError::InvalidCsr(format!(
                    "edge at index {} lies outside the slot of vertex {}",
                    i,
                    e.src()
                )));
            }
        }
        Ok(())
    }

    /// Start of `v`'s slot in the flat edge array.
    pub fn begin(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.offsets[v])
    }

    /// Exclusive end of `v`'s slot in the flat edge array.
    pub fn end(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.offsets[v + 1])
    }

    /// Edge record at flat index `i`.
    pub fn edge(&self, i: usize) -> Result<E> {
        self.edges
            .get(i)
            .copied()
            .ok_or(GraphError::EdgeOutOfRange(i))
    }

    /// Outgoing edges of `v`.
    pub fn out_edges(&self, v: VertexId) -> Result<&[E]> {
        self.check_vertex(v)?;
        Ok(&self.edges[self.offsets[v]..self.offsets[v + 1]])
    }

    /// Destination vertices of `v`'s outgoing edges, in ascending order.
    pub fn neighbors(&self, v: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        Ok(self.out_edges(v)?.iter().map(|e| e.dst()))
    }

    /// Out-degree of `v`.
    pub fn out_degree(&self, v: VertexId) -> Result<usize> {
        Ok(self.out_edges(v)?.len())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Directedness flag.
    ///
    /// Informational: traversal always follows edges from source to
    /// destination regardless of this flag. Rendering consumes it.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The offset array (length `vertex_count() + 1`).
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The flat edge array, grouped by source id.
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v >= self.vertex_count() {
            return Err(GraphError::VertexOutOfRange(v));
        }
        Ok(())
    }
}

impl<E: EdgeRecord> AdjacencyGraph for CsrGraph<E> {
    fn vertex_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_range(&self, v: VertexId) -> Range<usize> {
        self.offsets[v]..self.offsets[v + 1]
    }

    fn edge_dst(&self, i: usize) -> VertexId {
        self.edges[i].dst()
    }
}

/// A graph bundled with its per-vertex labels.
///
/// Serialized as one record so label mappings survive round trips together
/// with the adjacency data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData<E> {
    /// The adjacency structure.
    pub graph: CsrGraph<E>,
    /// One label per vertex, indexed by vertex id.
    pub labels: Vec<String>,
}

impl<E: EdgeRecord> GraphData<E> {
    /// Bundle a graph with its labels.
    ///
    /// # Errors
    ///
    /// [`GraphError::DimensionMismatch`] if the label count differs from
    /// the vertex count.
    pub fn new(graph: CsrGraph<E>, labels: Vec<String>) -> Result<Self> {
        if labels.len() != graph.vertex_count() {
            return Err(GraphError::DimensionMismatch {
                expected: graph.vertex_count(),
                actual: labels.len(),
            });
        }
        Ok(GraphData { graph, labels })
    }
}
