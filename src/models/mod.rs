//! Graph data model: edge records and the CSR adjacency structure.

pub mod csr;
pub mod edge;

pub use csr::{AdjacencyGraph, CsrGraph, GraphData};
pub use edge::{Edge, EdgeRecord, VertexId, VertexStatus, WeightedEdge};
