//! Breadth-first traversal.

use std::collections::VecDeque;

use super::preordering;
use crate::models::csr::AdjacencyGraph;
use crate::models::edge::VertexId;
use crate::Result;

/// BFS preorder over the vertices reachable from `seeds`.
///
/// Seeds enter a FIFO queue in the given order; vertices are emitted in
/// the order they are first discovered (classic layer order), each exactly
/// once. Children are visited in ascending destination order.
///
/// # Errors
///
/// [`crate::GraphError::VertexOutOfRange`] if any seed is out of range.
pub fn bfs_preordering<G: AdjacencyGraph>(g: &G, seeds: &[VertexId]) -> Result<Vec<VertexId>> {
    preordering::<G, VecDeque<VertexId>>(g, seeds)
}
