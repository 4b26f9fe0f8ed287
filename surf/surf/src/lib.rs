//! Surface-map graph toolkit.
//!
//! This umbrella crate re-exports the surf-* crates, providing a unified
//! API for working with scalar maps on triangulated surface meshes (such as
//! brain cortical surfaces). All crates are Layer 0: no I/O and no
//! rendering, so they can be used in CLI tools, WASM, servers, or Python
//! bindings. A mesh reader supplies the face table and scalar array; a
//! renderer consumes display values and highlight regions.
//!
//! # Quick Start
//!
//! ```
//! use surf::prelude::*;
//!
//! // Build connectivity from a triangle table and bind a scalar map.
//! let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
//! graph.bind_values(&[1.0, 5.0, 3.0, f64::NAN]).unwrap();
//!
//! // Climb toward the local maximum.
//! let peaks = gradient_step(&graph, &[0, 2], 1);
//! assert_eq!(peaks, vec![1, 1]);
//!
//! // Smooth the map and prepare it for display.
//! let smoothed = smooth(&graph, None, 2, 1);
//! let colors = display_values(&smoothed);
//! assert_eq!(colors.len(), 4);
//! ```
//!
//! # Module Organization
//!
//! - [`graph`] - `SurfaceGraph` construction, scalar binding, neighborhood
//!   aggregation, display values
//! - [`region`] - border detection, filtering, expansion, highlight regions
//! - [`ascent`] - discrete gradient-ascent stepping
//! - [`smooth`] - iterative neighborhood-mean smoothing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use surf_ascent as ascent;
pub use surf_graph as graph;
pub use surf_region as region;
pub use surf_smooth as smooth;

/// Commonly used types and functions.
pub mod prelude {
    pub use surf_ascent::{gradient_step, max_neighbor};
    pub use surf_graph::{
        display_values, display_values_with, multi_hop, neighbors_and_values, GraphError,
        GraphResult, Scalar, SurfaceGraph,
    };
    pub use surf_region::{
        expand, filter_to_region, find_border, is_border, Expansion, HighlightSet, Region,
        RegionError, RegionResult,
    };
    pub use surf_smooth::smooth;
}
