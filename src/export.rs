//! Graphviz dot export.
//!
//! Write-only rendering for external visualization tooling: one node
//! statement per vertex using the supplied label, one edge statement per
//! adjacency entry, `->` for directed and `--` for undirected graphs.

use std::path::Path;

use crate::models::csr::{AdjacencyGraph, CsrGraph};
use crate::models::edge::EdgeRecord;
use crate::{GraphError, Result};

/// Render a graph with per-vertex labels as a dot document.
///
/// The root vertex 0 is additionally emitted with bold-box styling before
/// the per-vertex statements, matching the established output shape.
///
/// # Errors
///
/// [`GraphError::DimensionMismatch`] if the label count differs from the
/// vertex count.
pub fn to_dot<E: EdgeRecord>(g: &CsrGraph<E>, labels: &[String]) -> Result<String> {
    let n = g.vertex_count();
    if labels.len() != n {
        return Err(GraphError::DimensionMismatch {
            expected: n,
            actual: labels.len(),
        });
    }

    let mut out = String::new();
    out.push_str(if g.is_directed() { "digraph" } else { "graph" });
    out.push_str(" G {\n");

    if let Some(root) = labels.first() {
        out.push_str(&format!(
            "\t0[peripheries=2, label=\"{root}\",style=bold,shape=box]\n"
        ));
    }
    for (v, label) in labels.iter().enumerate() {
        out.push_str(&format!("\t{v}[label=\"{label}\"]\n"));
    }

    let arrow = if g.is_directed() { "->" } else { "--" };
    for v in 0..n {
        for i in g.edge_range(v) {
            let w = g.edge_dst(i);
            out.push_str(&format!("\t{v}{arrow}{w}\n"));
        }
    }

    out.push_str("}\n");
    Ok(out)
}

/// Render a graph to a dot file on disk.
///
/// # Errors
///
/// - [`GraphError::DimensionMismatch`] on a label count mismatch
/// - [`GraphError::Io`] if the file cannot be written
pub fn write_dot<E: EdgeRecord, P: AsRef<Path>>(
    g: &CsrGraph<E>,
    labels: &[String],
    path: P,
) -> Result<()> {
    let rendered = to_dot(g, labels)?;
    std::fs::write(path, rendered)?;
    Ok(())
}
