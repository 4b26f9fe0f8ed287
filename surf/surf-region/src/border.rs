//! Region border detection and filtering.

use hashbrown::HashSet;
use surf_graph::SurfaceGraph;

/// Check whether `node` lies on the border of a region.
///
/// A node is on the border when at least one of its distinct neighbors falls
/// outside `region_nodes`. Computed by comparing the distinct-neighbor count
/// against the count of neighbors also in the region. The node itself need
/// not belong to the region; an absent or isolated node has no neighbors and
/// is never on a border.
///
/// # Example
///
/// ```
/// use hashbrown::HashSet;
/// use surf_graph::SurfaceGraph;
/// use surf_region::is_border;
///
/// let graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
/// let region: HashSet<u32> = [0, 1, 2].into_iter().collect();
///
/// // Node 1 neighbors 3, which is outside the region.
/// assert!(is_border(&graph, &region, 1));
/// // All of node 0's neighbors are inside.
/// assert!(!is_border(&graph, &region, 0));
/// ```
#[must_use]
pub fn is_border(graph: &SurfaceGraph, region_nodes: &HashSet<u32>, node: u32) -> bool {
    let neighbors = graph.neighbors(node);
    let total = neighbors.len();
    let in_region = neighbors
        .iter()
        .filter(|&&n| region_nodes.contains(&n))
        .count();
    in_region < total
}

/// Collect the nodes of `nodes` that lie on its border, in input order.
///
/// The returned order follows the input; semantically the result is a set
/// (the input is de-duplicated through the region membership test, and a
/// duplicated input node would appear duplicated in the output, so callers
/// holding genuinely set-like regions pass each node once).
#[must_use]
pub fn find_border(graph: &SurfaceGraph, nodes: &[u32]) -> Vec<u32> {
    let region: HashSet<u32> = nodes.iter().copied().collect();
    nodes
        .iter()
        .copied()
        .filter(|&node| is_border(graph, &region, node))
        .collect()
}

/// Restrict candidates to the members of a region (set intersection).
///
/// Idempotent: filtering an already-filtered set is a no-op.
#[must_use]
pub fn filter_to_region(region_nodes: &HashSet<u32>, candidates: &HashSet<u32>) -> HashSet<u32> {
    region_nodes.intersection(candidates).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x3 grid triangulated into 8 faces; node 4 is interior.
    ///
    /// ```text
    /// 6 - 7 - 8
    /// | \ | \ |
    /// 3 - 4 - 5
    /// | \ | \ |
    /// 0 - 1 - 2
    /// ```
    fn grid_graph() -> SurfaceGraph {
        SurfaceGraph::from_triangles(&[
            [0, 1, 4],
            [0, 4, 3],
            [1, 2, 5],
            [1, 5, 4],
            [3, 4, 7],
            [3, 7, 6],
            [4, 5, 8],
            [4, 8, 7],
        ])
    }

    #[test]
    fn whole_grid_has_no_border_against_itself() {
        let graph = grid_graph();
        let all: Vec<u32> = (0..9).collect();
        assert!(find_border(&graph, &all).is_empty());
    }

    #[test]
    fn border_of_lower_band() {
        let graph = grid_graph();
        // Rows 0 and 1; every node of row 1 touches row 2, and the corners
        // of row 0 touch row 1's diagonals only via in-region nodes.
        let band: Vec<u32> = vec![0, 1, 2, 3, 4, 5];
        let border = find_border(&graph, &band);

        // 3, 4, 5 neighbor row 2; 1 neighbors nothing outside the band,
        // and 0, 2 reach only in-band nodes.
        assert_eq!(border, vec![3, 4, 5]);
    }

    #[test]
    fn border_matches_outside_neighbor_definition() {
        let graph = grid_graph();
        let band: Vec<u32> = vec![0, 1, 2, 3, 4, 5];
        let region: HashSet<u32> = band.iter().copied().collect();

        for node in 0..9 {
            let expected = graph
                .neighbors(node)
                .iter()
                .any(|n| !region.contains(n));
            assert_eq!(is_border(&graph, &region, node), expected, "node {node}");
        }
    }

    #[test]
    fn isolated_node_is_not_border() {
        let graph = grid_graph();
        let region: HashSet<u32> = [0, 1].into_iter().collect();
        // 99 is not a node; it has no neighbors, hence no border membership.
        assert!(!is_border(&graph, &region, 99));
    }

    #[test]
    fn filter_is_intersection_and_idempotent() {
        let region: HashSet<u32> = [1, 2, 3, 4].into_iter().collect();
        let candidates: HashSet<u32> = [3, 4, 5, 6].into_iter().collect();

        let once = filter_to_region(&region, &candidates);
        let expected: HashSet<u32> = [3, 4].into_iter().collect();
        assert_eq!(once, expected);

        let twice = filter_to_region(&region, &once);
        assert_eq!(twice, once);
    }
}
