//! API Regression Tests for the Surf Crate Ecosystem
//!
//! These tests exercise the public API across crate boundaries, organized
//! in tiers of increasing complexity:
//!
//! - Tier 1: Foundation (surf-graph construction and binding)
//! - Tier 2: Neighborhoods and regions (surf-graph, surf-region)
//! - Tier 3: Field operations (surf-ascent, surf-smooth)
//! - Tier 4: End-to-end pipelines
//!
//! If any of these tests fail after API changes, it indicates a breaking
//! change that needs documentation and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use surf::prelude::*;

/// Two triangles sharing edge {1, 2}, with an extra {0, 3} edge so that
/// missing-value filtering from seed 0 is observable.
fn fixture_graph() -> SurfaceGraph {
    let mut graph = SurfaceGraph::from_faces(&[vec![0, 1, 2], vec![1, 2, 3], vec![0, 3]]);
    graph.bind_values(&[1.0, 5.0, 3.0, f64::NAN]).unwrap();
    graph
}

// =============================================================================
// TIER 1: Foundation - Graph Construction and Binding
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn edges_follow_face_cooccurrence() {
        let graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);

        // Exactly the co-occurring pairs are connected.
        let expected = [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)];
        assert_eq!(graph.edge_count(), expected.len());
        for (u, v) in expected {
            assert!(graph.has_edge(u, v), "missing edge {{{u}, {v}}}");
        }
        assert!(!graph.has_edge(0, 3), "0 and 3 never share a face");
    }

    #[test]
    fn binding_surfaces_out_of_range() {
        let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 5]]);
        let err = graph.bind_values(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, GraphError::ValueIndexOutOfRange { .. }));
    }

    #[test]
    fn unbound_missing_and_present_are_distinct() {
        let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2]]);
        assert_eq!(graph.value(0), None); // unbound

        graph.bind_values(&[1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(graph.value(0), Some(Scalar::Value(1.0)));
        assert_eq!(graph.value(1), Some(Scalar::Missing));
    }

    #[test]
    fn display_values_normalize_missing() {
        let graph = fixture_graph();
        assert_eq!(display_values(&graph), vec![1.0, 5.0, 3.0, 0.0]);
        assert_eq!(display_values_with(&graph, -1.0)[3], -1.0);
    }
}

// =============================================================================
// TIER 2: Neighborhoods and Regions
// =============================================================================

mod tier2_regions {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn one_hop_neighborhood_of_node_zero() {
        let graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
        let hood = neighbors_and_values(&graph, &[0]);

        let mut keys: Vec<u32> = hood.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn border_is_exactly_outside_neighbor_membership() {
        let graph = fixture_graph();
        let region_nodes = vec![0, 1, 2];
        let region: HashSet<u32> = region_nodes.iter().copied().collect();

        let border = find_border(&graph, &region_nodes);
        for &node in &region_nodes {
            let has_outside = neighbors_and_values(&graph, &[node])
                .keys()
                .any(|k| !region.contains(k));
            assert_eq!(border.contains(&node), has_outside, "node {node}");
        }
    }

    #[test]
    fn filter_to_region_idempotence() {
        let region: HashSet<u32> = [0, 1, 2].into_iter().collect();
        let candidates: HashSet<u32> = [1, 2, 3, 4].into_iter().collect();

        let once = filter_to_region(&region, &candidates);
        let twice = filter_to_region(&region, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn expansion_skips_missing_neighbors() {
        let graph = fixture_graph();
        // Seed 0 touches 1, 2, and (via the extra edge) 3; 3 is missing.
        let grown = expand(&graph, &[0], 1, true);

        let mut added: Vec<u32> = grown.new_nodes.into_iter().collect();
        added.sort_unstable();
        assert_eq!(added, vec![1, 2]);
    }

    #[test]
    fn zero_step_expansion_is_identity() {
        let graph = fixture_graph();
        let grown = expand(&graph, &[0, 1], 0, false);
        assert_eq!(grown.nodes, vec![0, 1]);
        assert!(grown.new_nodes.is_empty());
    }

    #[test]
    fn highlight_workflow() {
        let graph = fixture_graph();
        let patch = Region::from_nodes("patch", [0, 1, 2]);

        let mut highlights = HighlightSet::new();
        highlights.add(patch.clone()).unwrap();
        highlights.add(patch.expand(&graph, 1, true)).unwrap();
        highlights.add(Region::from_nodes("peak", [1])).unwrap();

        let err = highlights.add(Region::new("overflow")).unwrap_err();
        assert!(matches!(err, RegionError::TooManyHighlights { max: 3 }));

        // Every highlighted region carries a color for the renderer.
        assert!(highlights.regions().iter().all(|r| r.color().is_some()));
    }
}

// =============================================================================
// TIER 3: Field Operations - Ascent and Smoothing
// =============================================================================

mod tier3_field_ops {
    use super::*;

    #[test]
    fn max_neighbor_scenario() {
        let graph = fixture_graph();
        assert_eq!(max_neighbor(&graph, 0, 1), Some((1, 5.0)));
    }

    #[test]
    fn ascent_no_op_at_unique_maximum() {
        let graph = fixture_graph();
        assert_eq!(gradient_step(&graph, &[1], 1), vec![1]);
    }

    #[test]
    fn ascent_preserves_length_and_order() {
        let graph = fixture_graph();
        let out = gradient_step(&graph, &[2, 0, 2], 1);
        assert_eq!(out.len(), 3);
        assert_eq!(out, vec![1, 1, 1]);
    }

    #[test]
    fn constant_field_smoothing_identity() {
        let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
        graph.bind_values(&[7.0; 4]).unwrap();

        let smoothed = smooth(&graph, None, 1, 1);
        for node in smoothed.nodes() {
            assert_eq!(smoothed.value(node), Some(Scalar::Value(7.0)));
        }
    }

    #[test]
    fn smoothing_never_mutates_input() {
        let graph = fixture_graph();
        let _ = smooth(&graph, None, 3, 1);
        assert_eq!(graph.value(0), Some(Scalar::Value(1.0)));
        assert_eq!(graph.value(3), Some(Scalar::Missing));
    }
}

// =============================================================================
// TIER 4: End-to-End Pipelines
// =============================================================================

mod tier4_pipelines {
    use super::*;

    #[test]
    fn smooth_then_climb_then_display() {
        // Rising path 0-1-2-3-4 with a noisy dip at node 2.
        let mut graph = SurfaceGraph::from_faces(&[
            vec![0, 1],
            vec![1, 2],
            vec![2, 3],
            vec![3, 4],
        ]);
        graph.bind_values(&[0.0, 2.0, 1.0, 4.0, 6.0]).unwrap();

        let smoothed = smooth(&graph, None, 1, 1);

        // Smoothing lifts the dip: node 2's mean of {2.0, 4.0} is 3.0.
        assert_eq!(smoothed.value(2), Some(Scalar::Value(3.0)));

        // Repeated ascent from node 0 reaches the end of the path.
        let mut positions = vec![0_u32];
        for _ in 0..4 {
            positions = gradient_step(&smoothed, &positions, 1);
        }
        assert_eq!(positions, vec![4]);

        // The display list is dense and in node order.
        let display = display_values(&smoothed);
        assert_eq!(display.len(), 5);
        assert!(display.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn expand_then_border_round_trip() {
        let graph = fixture_graph();

        // Growing {0} by one hop and taking the border of the grown set
        // must flag exactly the grown set's outward-facing nodes.
        let grown = expand(&graph, &[0], 1, false);
        let mut members: Vec<u32> = vec![0];
        members.extend({
            let mut added: Vec<u32> = grown.new_nodes.iter().copied().collect();
            added.sort_unstable();
            added
        });

        // The grown set covers the whole fixture graph, so no borders.
        assert_eq!(members, vec![0, 1, 2, 3]);
        assert!(find_border(&graph, &members).is_empty());
    }
}
