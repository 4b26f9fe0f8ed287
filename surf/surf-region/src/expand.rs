//! Node-set expansion.

use hashbrown::HashSet;
use surf_graph::{neighbors_and_values, SurfaceGraph};

/// Result of growing a node set outward.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// The full accumulated working list: the original nodes followed by
    /// every appended neighbor id, duplicates included.
    pub nodes: Vec<u32>,

    /// The de-duplicated set of nodes added relative to the original input.
    pub new_nodes: HashSet<u32>,
}

/// Grow a node set outward by `stepsize` hops.
///
/// Each of the `stepsize` rounds computes the 1-hop neighborhood of the
/// **entire accumulated list** - every prior node, including the original
/// seeds, is re-expanded each round - and appends all neighbor ids to the
/// working list, already-present or not. With `ignore_missing`, neighbors
/// whose scalar value is [`Missing`](surf_graph::Scalar::Missing) are
/// dropped before appending; on an unbound graph this drops every neighbor.
///
/// `stepsize == 0` returns the input unchanged with empty `new_nodes`.
///
/// # Example
///
/// ```
/// use surf_graph::SurfaceGraph;
/// use surf_region::expand;
///
/// let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
/// graph.bind_values(&[1.0, 5.0, 3.0, f64::NAN]).unwrap();
///
/// let grown = expand(&graph, &[0], 1, true);
/// let mut added: Vec<u32> = grown.new_nodes.into_iter().collect();
/// added.sort_unstable();
/// assert_eq!(added, vec![1, 2]);
/// ```
#[must_use]
pub fn expand(
    graph: &SurfaceGraph,
    nodes: &[u32],
    stepsize: u32,
    ignore_missing: bool,
) -> Expansion {
    let original: HashSet<u32> = nodes.iter().copied().collect();
    let mut accumulated: Vec<u32> = nodes.to_vec();

    for _ in 0..stepsize {
        let hood = neighbors_and_values(graph, &accumulated);
        for (neighbor, value) in hood {
            if ignore_missing && value.is_missing() {
                continue;
            }
            accumulated.push(neighbor);
        }
    }

    let new_nodes = accumulated
        .iter()
        .copied()
        .filter(|n| !original.contains(n))
        .collect();

    Expansion {
        nodes: accumulated,
        new_nodes,
    }
}
