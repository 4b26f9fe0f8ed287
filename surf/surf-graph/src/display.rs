//! Renderer-facing value preparation.
//!
//! Renderers want a dense value per node with no missing entries; these
//! helpers normalize missing values to a display sentinel. The sentinel is
//! for display only and must never feed back into computation.

use crate::graph::SurfaceGraph;
use crate::scalar::Scalar;

/// Scalar values in node order with missing values normalized to `0.0`.
///
/// On an unbound graph every entry is the sentinel.
///
/// # Example
///
/// ```
/// use surf_graph::{display_values, SurfaceGraph};
///
/// let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2]]);
/// graph.bind_values(&[1.0, f64::NAN, 3.0]).unwrap();
///
/// assert_eq!(display_values(&graph), vec![1.0, 0.0, 3.0]);
/// ```
#[must_use]
pub fn display_values(graph: &SurfaceGraph) -> Vec<f64> {
    display_values_with(graph, 0.0)
}

/// Scalar values in node order with missing values replaced by `sentinel`.
#[must_use]
pub fn display_values_with(graph: &SurfaceGraph, sentinel: f64) -> Vec<f64> {
    match graph.values() {
        Some(values) => values.iter().map(|v| v.value_or(sentinel)).collect(),
        None => vec![sentinel; graph.node_count()],
    }
}
