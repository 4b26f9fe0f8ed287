//! Discrete gradient ascent on a surface map.
//!
//! One ascent step moves each node of a working set to its highest-valued
//! neighbor within a hop radius, when that neighbor improves on the node's
//! own value. Repeated stepping climbs toward local maxima of the scalar
//! field; convergence looping is left to the caller, who typically iterates
//! until the returned positions stop changing.
//!
//! # Layer 0 Crate
//!
//! Pure functions over a [`SurfaceGraph`](surf_graph::SurfaceGraph); no
//! I/O, no rendering.
//!
//! # Quick Start
//!
//! ```
//! use surf_ascent::{gradient_step, max_neighbor};
//! use surf_graph::SurfaceGraph;
//!
//! let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
//! graph.bind_values(&[1.0, 5.0, 3.0, f64::NAN]).unwrap();
//!
//! assert_eq!(max_neighbor(&graph, 0, 1), Some((1, 5.0)));
//!
//! // 0 climbs to its best neighbor; 1 is already a local maximum.
//! assert_eq!(gradient_step(&graph, &[0, 1], 1), vec![1, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use surf_graph::{multi_hop, Scalar, SurfaceGraph};

/// Find the maximum-valued neighbor of `node` within `radius` hops.
///
/// The neighborhood is [`multi_hop`]'s aggregation (which, for a single
/// static seed, equals the 1-hop neighborhood for any `radius >= 1`).
/// Missing values are never the maximum. Returns `None` when the
/// neighborhood is empty, the radius is zero, or every neighbor's value is
/// missing — the empty-neighborhood case is "no improvement", not an error.
///
/// Tie order between equal maxima follows the neighborhood map's iteration
/// order, which is implementation-defined; callers must not depend on it.
#[must_use]
pub fn max_neighbor(graph: &SurfaceGraph, node: u32, radius: u32) -> Option<(u32, f64)> {
    let hood = multi_hop(graph, &[node], radius);

    let mut best: Option<(u32, f64)> = None;
    for (neighbor, scalar) in hood {
        if let Scalar::Value(value) = scalar {
            match best {
                Some((_, best_value)) if best_value >= value => {}
                _ => best = Some((neighbor, value)),
            }
        }
    }
    best
}

/// Take one gradient-ascent step for each node of a working set.
///
/// Every node is treated independently: it is replaced by its
/// [`max_neighbor`] within `stepsize` hops when that neighbor's value
/// **strictly** exceeds the node's own, and kept in place otherwise
/// (local maximum reached, empty neighborhood, or an own value that is
/// missing or unbound — missing never compares greater). The result has the
/// same length and order as the input; duplicates in the input map to
/// duplicates in the output.
///
/// # Example
///
/// ```
/// use surf_ascent::gradient_step;
/// use surf_graph::SurfaceGraph;
///
/// // Path 0-1-2 with values rising toward node 2.
/// let mut graph = SurfaceGraph::from_faces(&[vec![0, 1], vec![1, 2]]);
/// graph.bind_values(&[1.0, 2.0, 3.0]).unwrap();
///
/// let step1 = gradient_step(&graph, &[0], 1);
/// let step2 = gradient_step(&graph, &step1, 1);
/// assert_eq!(step2, vec![2]);
/// ```
#[must_use]
pub fn gradient_step(graph: &SurfaceGraph, nodes: &[u32], stepsize: u32) -> Vec<u32> {
    nodes
        .iter()
        .map(|&node| {
            let own = graph.value(node).and_then(Scalar::value);
            match (own, max_neighbor(graph, node, stepsize)) {
                (Some(own), Some((best, best_value))) if best_value > own => best,
                _ => node,
            }
        })
        .collect()
}
