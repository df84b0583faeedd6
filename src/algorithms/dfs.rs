//! Depth-first traversals: iterative pre/postorder and recursive
//! reference variants.
//!
//! The iterative versions are the production path. The recursive ones use
//! native stack depth proportional to graph depth and exist to cross-check
//! the iterative implementations in tests.

use std::collections::VecDeque;

use super::{check_seeds, preordering};
use crate::models::csr::AdjacencyGraph;
use crate::models::edge::{VertexId, VertexStatus};
use crate::{GraphError, Result};

/// Iterative DFS preorder over the vertices reachable from `seeds`.
///
/// Children are pushed in reverse edge order so the stack pops them in
/// ascending destination order, matching the recursive variant.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`] if any seed is out of range.
pub fn dfs_preordering<G: AdjacencyGraph>(g: &G, seeds: &[VertexId]) -> Result<Vec<VertexId>> {
    preordering::<G, Vec<VertexId>>(g, seeds)
}

/// Iterative DFS postorder over the vertices reachable from `seeds`.
///
/// Two-phase protocol: the top of the stack is peeked, not popped. An
/// `Undiscovered` vertex is marked `Visited` (frontier) and its children
/// are pushed above it; when the stack unwinds back to a `Visited` vertex
/// all of its children have been finalized, so it is popped and emitted.
/// A vertex reached again through another path is popped and dropped.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`] if any seed is out of range.
pub fn dfs_postordering<G: AdjacencyGraph>(g: &G, seeds: &[VertexId]) -> Result<Vec<VertexId>> {
    check_seeds(g, seeds)?;

    let n = g.vertex_count();
    let mut status = vec![VertexStatus::Undiscovered; n];
    let mut stack: Vec<VertexId> = seeds.to_vec();
    let mut results = Vec::with_capacity(n);

    while let Some(&v) = stack.last() {
        match status[v] {
            VertexStatus::Undiscovered => {
                // Keep v on the stack beneath its children.
                status[v] = VertexStatus::Visited;
                for i in g.edge_range(v).rev() {
                    stack.push(g.edge_dst(i));
                }
            }
            VertexStatus::Visited => {
                stack.pop();
                results.push(v);
                status[v] = VertexStatus::Discovered;
            }
            VertexStatus::Discovered => {
                stack.pop();
            }
        }
    }
    Ok(results)
}

/// Iterative DFS postorder that prepends finalized vertices to `out`.
///
/// The accumulated sequence is in dependency-respecting (topological)
/// order without a final reversal, which is what
/// [`topological_sorted_list`](super::topo::topological_sorted_list)
/// builds on. `status` is caller-owned so consecutive calls can share one
/// array across seed groups; it must be `vertex_count()` long.
///
/// # Errors
///
/// - [`GraphError::VertexOutOfRange`] if any seed is out of range
/// - [`GraphError::DimensionMismatch`] if `status` has the wrong length
/// - [`GraphError::CycleDetected`] if an expansion reaches a vertex still
///   in the `Visited` state — a back edge to an ancestor on the stack.
///   Acyclicity is a contract of this variant, not an assumption
pub fn dfs_postordering_front<G: AdjacencyGraph>(
    g: &G,
    seeds: &[VertexId],
    status: &mut [VertexStatus],
    out: &mut VecDeque<VertexId>,
) -> Result<()> {
    check_seeds(g, seeds)?;
    if status.len() != g.vertex_count() {
        return Err(GraphError::DimensionMismatch {
            expected: g.vertex_count(),
            actual: status.len(),
        });
    }

    let mut stack: Vec<VertexId> = seeds.to_vec();

    while let Some(&v) = stack.last() {
        match status[v] {
            VertexStatus::Undiscovered => {
                status[v] = VertexStatus::Visited;
                for i in g.edge_range(v).rev() {
                    let child = g.edge_dst(i);
                    if status[child] == VertexStatus::Visited {
                        return Err(GraphError::CycleDetected(child));
                    }
                    stack.push(child);
                }
            }
            VertexStatus::Visited => {
                stack.pop();
                out.push_front(v);
                status[v] = VertexStatus::Discovered;
            }
            VertexStatus::Discovered => {
                stack.pop();
            }
        }
    }
    Ok(())
}

/// Recursive DFS preorder, appended into caller-owned arrays.
///
/// Reference implementation: stack depth equals graph depth, so this is
/// only suitable for graphs of bounded depth.
///
/// # Errors
///
/// - [`GraphError::VertexOutOfRange`] if `vid` is out of range
/// - [`GraphError::DimensionMismatch`] if `status` has the wrong length
pub fn dfs_recursive_preordering<G: AdjacencyGraph>(
    g: &G,
    vid: VertexId,
    status: &mut [VertexStatus],
    results: &mut Vec<VertexId>,
) -> Result<()> {
    check_recursive_args(g, vid, status)?;
    recurse_preorder(g, vid, status, results);
    Ok(())
}

/// Recursive DFS postorder, appended into caller-owned arrays.
///
/// Same stack-depth caveat as
/// [`dfs_recursive_preordering`].
///
/// # Errors
///
/// - [`GraphError::VertexOutOfRange`] if `vid` is out of range
/// - [`GraphError::DimensionMismatch`] if `status` has the wrong length
pub fn dfs_recursive_postordering<G: AdjacencyGraph>(
    g: &G,
    vid: VertexId,
    status: &mut [VertexStatus],
    results: &mut Vec<VertexId>,
) -> Result<()> {
    check_recursive_args(g, vid, status)?;
    recurse_postorder(g, vid, status, results);
    Ok(())
}

fn check_recursive_args<G: AdjacencyGraph>(
    g: &G,
    vid: VertexId,
    status: &[VertexStatus],
) -> Result<()> {
    if vid >= g.vertex_count() {
        return Err(GraphError::VertexOutOfRange(vid));
    }
    if status.len() != g.vertex_count() {
        return Err(GraphError::DimensionMismatch {
            expected: g.vertex_count(),
            actual: status.len(),
        });
    }
    Ok(())
}

fn recurse_preorder<G: AdjacencyGraph>(
    g: &G,
    vid: VertexId,
    status: &mut [VertexStatus],
    results: &mut Vec<VertexId>,
) {
    if status[vid] != VertexStatus::Undiscovered {
        return;
    }
    status[vid] = VertexStatus::Discovered;
    results.push(vid);
    for i in g.edge_range(vid) {
        recurse_preorder(g, g.edge_dst(i), status, results);
    }
}

fn recurse_postorder<G: AdjacencyGraph>(
    g: &G,
    vid: VertexId,
    status: &mut [VertexStatus],
    results: &mut Vec<VertexId>,
) {
    if status[vid] != VertexStatus::Undiscovered {
        return;
    }
    status[vid] = VertexStatus::Discovered;
    for i in g.edge_range(vid) {
        recurse_postorder(g, g.edge_dst(i), status, results);
    }
    results.push(vid);
}
