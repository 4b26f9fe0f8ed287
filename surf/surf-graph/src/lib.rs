//! Mesh-connectivity graph with a per-node scalar field.
//!
//! This crate is the foundation of the surf stack: it turns a face-index
//! table (e.g. the triangle table of a cortical surface mesh) into an
//! undirected graph, binds a per-vertex scalar map to the nodes, and
//! provides the neighborhood aggregation primitive that the region,
//! gradient-ascent, and smoothing crates build on.
//!
//! # Layer 0 Crate
//!
//! No rendering, no file I/O: face tables and scalar arrays come from an
//! external loader, and display output is a plain value list. This crate
//! can be used in CLI tools, WASM, servers, or Python bindings.
//!
//! # Quick Start
//!
//! ```
//! use surf_graph::{neighbors_and_values, Scalar, SurfaceGraph};
//!
//! // Two triangles sharing an edge.
//! let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
//!
//! // Bind a scalar map (NaN marks a missing measurement).
//! graph.bind_values(&[1.0, 5.0, 3.0, f64::NAN]).unwrap();
//!
//! // Query a neighborhood.
//! let hood = neighbors_and_values(&graph, &[0]);
//! assert_eq!(hood[&1], Scalar::Value(5.0));
//! ```
//!
//! # Data Model
//!
//! - [`SurfaceGraph`] - nodes are distinct vertex ids, edges are pairwise
//!   co-occurrence within a face row
//! - [`Scalar`] - a map value or an explicit `Missing` marker
//! - [`neighbors_and_values`] / [`multi_hop`] - neighborhood aggregation
//! - [`display_values`] - renderer-facing value list with missing values
//!   normalized to a sentinel

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod display;
mod error;
mod graph;
mod neighbors;
mod scalar;

pub use display::{display_values, display_values_with};
pub use error::{GraphError, GraphResult};
pub use graph::SurfaceGraph;
pub use neighbors::{multi_hop, neighbors_and_values};
pub use scalar::Scalar;
