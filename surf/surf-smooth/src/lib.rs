//! Iterative neighborhood-mean smoothing of surface maps.
//!
//! Smoothing replaces each target node's scalar value with the arithmetic
//! mean of its neighborhood's values, repeated for a configurable number of
//! passes. Missing values are excluded from the mean; an all-missing or
//! empty neighborhood yields a missing result rather than an error.
//!
//! # Algorithm
//!
//! For each pass, every target node n with neighborhood N(n):
//!
//! ```text
//! v_new(n) = mean { v(m) : m in N(n), v(m) not missing }
//! ```
//!
//! All replacement values of a pass are computed from the previous pass's
//! state and applied as a batch, so results do not depend on node order
//! within a pass. The input graph is never mutated; smoothing deep-copies
//! it and returns the smoothed copy.
//!
//! # Quick Start
//!
//! ```
//! use surf_graph::{Scalar, SurfaceGraph};
//! use surf_smooth::smooth;
//!
//! let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
//! graph.bind_values(&[0.0, 4.0, 4.0, 8.0]).unwrap();
//!
//! let smoothed = smooth(&graph, None, 1, 1);
//!
//! // Node 0's neighbors are 1 and 2: mean 4.0.
//! assert_eq!(smoothed.value(0), Some(Scalar::Value(4.0)));
//! // The input graph is untouched.
//! assert_eq!(graph.value(0), Some(Scalar::Value(0.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use hashbrown::HashMap;
use surf_graph::{multi_hop, Scalar, SurfaceGraph};
use tracing::debug;

/// Smooth a graph's scalar map, returning a new graph.
///
/// Runs `iterations` passes over the target nodes (`None` targets every
/// node). Each pass replaces a target's value with the mean of its
/// `kernel_radius`-hop neighborhood from the previous pass's state; the
/// replacements are staged and applied after the whole pass has been read,
/// never interleaved. Neighborhoods follow
/// [`multi_hop`]'s aggregation contract.
///
/// Missing values are skipped in the mean; a neighborhood with no present
/// values (including every neighborhood of an unbound input) smooths to
/// [`Scalar::Missing`]. Target ids that are not graph nodes are ignored.
/// Zero `iterations` or a zero `kernel_radius` with no present neighbors
/// degrade gracefully: the former returns an unmodified copy, the latter
/// smooths every target to missing.
#[must_use]
pub fn smooth(
    graph: &SurfaceGraph,
    nodes: Option<&[u32]>,
    iterations: u32,
    kernel_radius: u32,
) -> SurfaceGraph {
    let targets: Vec<u32> = match nodes {
        Some(nodes) => nodes.to_vec(),
        None => graph.nodes().collect(),
    };

    let mut smoothed = graph.clone();
    for pass in 0..iterations {
        debug!(pass = pass + 1, total = iterations, "smoothing pass");

        // Stage every replacement before applying any of them, so that all
        // means read the previous pass's values.
        let mut staged: HashMap<u32, Scalar> = HashMap::with_capacity(targets.len());
        for &node in &targets {
            let hood = multi_hop(&smoothed, &[node], kernel_radius);
            staged.insert(node, neighborhood_mean(hood.values().copied()));
        }

        for (node, value) in staged {
            smoothed.set_value(node, value);
        }
    }
    smoothed
}

/// Mean of the present values, or `Missing` when there are none.
fn neighborhood_mean(values: impl Iterator<Item = Scalar>) -> Scalar {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for value in values.filter_map(Scalar::value) {
        sum += value;
        count += 1;
    }

    if count == 0 {
        Scalar::Missing
    } else {
        #[allow(clippy::cast_precision_loss)]
        Scalar::Value(sum / count as f64)
    }
}
