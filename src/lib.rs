//! Compact in-memory directed graphs in CSR (Compressed Sparse Row) form.
//!
//! The graph is built once from a pre-sorted edge list and is read-only
//! afterwards. On top of it this crate provides:
//!
//! - **Traversals**: BFS and DFS preorder, iterative DFS postorder, plus
//!   recursive reference variants, all driven by an explicit work list so
//!   deep graphs cannot overflow the native stack
//! - **Topological sort**: DFS-postorder based, with cycle detection
//! - **Codecs**: binary, portable-binary, JSON and XML encodings of a graph
//! - **Dot export**: Graphviz rendering for visualization
//!
//! # Example
//!
//! ```
//! use csrgraph::{bfs_preordering, CsrGraph, Edge};
//!
//! // 0 -> 1 -> 2
//! let edges = vec![Edge::new(0, 1), Edge::new(1, 2)];
//! let g = CsrGraph::from_sorted_edges(edges, 3, true)?;
//!
//! let order = bfs_preordering(&g, &[0])?;
//! assert_eq!(order, vec![0, 1, 2]);
//! # Ok::<(), csrgraph::GraphError>(())
//! ```

pub mod algorithms;
pub mod codec;
pub mod export;
pub mod models;

// Re-export main types
pub use algorithms::bfs::bfs_preordering;
pub use algorithms::dfs::{
    dfs_postordering, dfs_postordering_front, dfs_preordering, dfs_recursive_postordering,
    dfs_recursive_preordering,
};
pub use algorithms::topo::topological_sorted_list;
pub use algorithms::worklist::WorkList;
pub use codec::{decode, decode_graph, encode, Encoding};
pub use export::{to_dot, write_dot};
pub use models::csr::{AdjacencyGraph, CsrGraph, GraphData};
pub use models::edge::{Edge, EdgeRecord, VertexId, VertexStatus, WeightedEdge};

/// Graph error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Vertex id outside `[0, vertex_count)`.
    #[error("vertex id {0} is out of range")]
    VertexOutOfRange(VertexId),

    /// Flat edge index outside `[0, edge_count)`.
    #[error("edge index {0} is out of range")]
    EdgeOutOfRange(usize),

    /// Construction input violated the sorted-by-(src, dst) precondition.
    #[error("edge list is not sorted by (src, dst) at position {0}")]
    UnsortedEdges(usize),

    /// Invalid CSR structure.
    #[error("invalid CSR structure: {0}")]
    InvalidCsr(String),

    /// A back edge was found where the algorithm requires a DAG.
    #[error("cycle detected through vertex {0}")]
    CycleDetected(VertexId),

    /// Parallel-array length mismatch (labels, status).
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Encode/decode failure.
    #[error("codec error: {0}")]
    Codec(String),

    /// I/O failure while writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
