//! Traversal algorithms over CSR graphs.
//!
//! All production traversals are iterative: an explicit work list stands in
//! for the call stack, so graph depth never risks native stack overflow.
//! The recursive DFS variants exist as reference implementations for
//! cross-checking only.

pub mod bfs;
pub mod dfs;
pub mod topo;
pub mod worklist;

pub use bfs::bfs_preordering;
pub use dfs::{
    dfs_postordering, dfs_postordering_front, dfs_preordering, dfs_recursive_postordering,
    dfs_recursive_preordering,
};
pub use topo::topological_sorted_list;
pub use worklist::WorkList;

use crate::models::csr::AdjacencyGraph;
use crate::models::edge::{VertexId, VertexStatus};
use crate::{GraphError, Result};

/// Validate a seed set against a graph before traversing from it.
pub(crate) fn check_seeds<G: AdjacencyGraph>(g: &G, seeds: &[VertexId]) -> Result<()> {
    for &v in seeds {
        if v >= g.vertex_count() {
            return Err(GraphError::VertexOutOfRange(v));
        }
    }
    Ok(())
}

/// Generic preorder traversal, parameterized by the work-list discipline.
///
/// A FIFO work list yields BFS layer order, a LIFO work list yields DFS
/// preorder. Children are fed to the work list so that they are visited in
/// ascending destination order either way: a LIFO list receives them in
/// reverse edge order, which the stack inverts back.
///
/// Every reachable vertex appears exactly once, in the order it was first
/// discovered. Duplicate work-list entries are normal and skipped on pop.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`] if any seed is out of range.
pub fn preordering<G, W>(g: &G, seeds: &[VertexId]) -> Result<Vec<VertexId>>
where
    G: AdjacencyGraph,
    W: WorkList,
{
    check_seeds(g, seeds)?;

    let n = g.vertex_count();
    let mut work = W::default();
    for &v in seeds {
        work.push(v);
    }
    let mut status = vec![VertexStatus::Undiscovered; n];
    let mut results = Vec::with_capacity(n);

    while let Some(v) = work.pop() {
        if status[v] != VertexStatus::Undiscovered {
            continue;
        }
        status[v] = VertexStatus::Discovered;
        results.push(v);

        let range = g.edge_range(v);
        if W::LIFO {
            for i in range.rev() {
                work.push(g.edge_dst(i));
            }
        } else {
            for i in range {
                work.push(g.edge_dst(i));
            }
        }
    }
    Ok(results)
}
