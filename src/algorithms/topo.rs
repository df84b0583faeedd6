//! Topological sort, layered on DFS postorder-to-front.

use std::collections::VecDeque;

use tracing::trace;

use super::dfs::dfs_postordering_front;
use crate::models::csr::AdjacencyGraph;
use crate::models::edge::{VertexId, VertexStatus};
use crate::Result;

/// Topological order of a DAG's vertices.
///
/// Every vertex appears strictly before all vertices it has edges to. Sink
/// vertices are seeded first (prepended in increasing id), then a DFS
/// postorder-to-front pass runs from every remaining undiscovered vertex
/// in increasing id — this fixes the tie-break among independent vertices
/// but not overall validity.
///
/// # Errors
///
/// [`crate::GraphError::CycleDetected`] if the graph is not acyclic.
pub fn topological_sorted_list<G: AdjacencyGraph>(g: &G) -> Result<Vec<VertexId>> {
    let n = g.vertex_count();
    let mut status = vec![VertexStatus::Undiscovered; n];
    let mut results: VecDeque<VertexId> = VecDeque::with_capacity(n);

    // Sinks have no dependencies pointing out of them; finalize them up
    // front so the DFS passes skip their slots.
    for v in 0..n {
        if g.is_sink(v) {
            results.push_front(v);
            status[v] = VertexStatus::Discovered;
        }
    }
    trace!(sinks = results.len(), vertices = n, "seeded sink vertices");

    for v in 0..n {
        if status[v] == VertexStatus::Undiscovered {
            dfs_postordering_front(g, &[v], &mut status, &mut results)?;
        }
    }
    Ok(results.into_iter().collect())
}
