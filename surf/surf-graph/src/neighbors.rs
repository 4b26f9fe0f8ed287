//! Neighborhood aggregation over the surface graph.
//!
//! The primitive underlying border detection, region expansion, gradient
//! ascent, and smoothing: collect the neighbors of a seed set together with
//! their scalar values.

use hashbrown::HashMap;

use crate::graph::SurfaceGraph;
use crate::scalar::Scalar;

/// Collect the 1-hop neighbors of a seed set, mapped to their scalar values.
///
/// The result holds one entry per distinct neighbor of any seed. Seeds are
/// not included on their own account, but a seed that is adjacent to another
/// seed appears as a key like any other neighbor. Seeds that are not nodes
/// of the graph contribute nothing; an absent seed is an empty neighborhood,
/// not an error. On an unbound graph every neighbor maps to
/// [`Scalar::Missing`].
///
/// Single-seed callers pass a one-element slice.
///
/// # Example
///
/// ```
/// use surf_graph::{neighbors_and_values, Scalar, SurfaceGraph};
///
/// let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
/// graph.bind_values(&[1.0, 5.0, 3.0, f64::NAN]).unwrap();
///
/// let hood = neighbors_and_values(&graph, &[0]);
/// assert_eq!(hood.len(), 2);
/// assert_eq!(hood[&1], Scalar::Value(5.0));
/// assert_eq!(hood[&2], Scalar::Value(3.0));
/// ```
#[must_use]
pub fn neighbors_and_values(graph: &SurfaceGraph, seeds: &[u32]) -> HashMap<u32, Scalar> {
    let mut hood = HashMap::new();
    for &seed in seeds {
        for &neighbor in graph.neighbors(seed) {
            let value = graph.value(neighbor).unwrap_or(Scalar::Missing);
            hood.insert(neighbor, value);
        }
    }
    hood
}

/// Apply [`neighbors_and_values`] `hops` times, merging into one map.
///
/// Every round re-expands the **original** seed set, not the growing
/// frontier. With a static seed set the result of `hops > 1` therefore
/// equals the 1-hop result; larger radii only reach farther when the seed
/// set itself changes between calls. This reproduces the aggregation
/// contract the downstream gradient-ascent and smoothing radii are defined
/// against; widen the seed set (e.g. via region expansion) to genuinely
/// grow the neighborhood.
///
/// `hops == 0` yields an empty map. Never errors.
#[must_use]
pub fn multi_hop(graph: &SurfaceGraph, seeds: &[u32], hops: u32) -> HashMap<u32, Scalar> {
    let mut hood = HashMap::new();
    for _ in 0..hops {
        hood.extend(neighbors_and_values(graph, seeds));
    }
    hood
}
