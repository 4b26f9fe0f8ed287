//! Region operations over surface-map graphs.
//!
//! This crate provides set-like operations on subsets of a
//! [`SurfaceGraph`](surf_graph::SurfaceGraph)'s nodes:
//!
//! - **Border detection** - which members of a region touch the outside
//! - **Filtering** - restricting candidates to a region (set intersection)
//! - **Expansion** - growing a node set outward hop by hop, optionally
//!   skipping missing-valued neighbors
//! - **Highlights** - named, colored regions for a renderer to overlay
//!
//! # Layer 0 Crate
//!
//! No rendering and no I/O; highlight colors are plain RGB triples consumed
//! by an external renderer.
//!
//! # Quick Start
//!
//! ```
//! use surf_graph::SurfaceGraph;
//! use surf_region::{expand, find_border};
//!
//! let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
//! graph.bind_values(&[1.0, 5.0, 3.0, f64::NAN]).unwrap();
//!
//! // Nodes of {0, 1, 2} with a neighbor outside the region.
//! let border = find_border(&graph, &[0, 1, 2]);
//! assert_eq!(border, vec![1, 2]);
//!
//! // Grow the seed set by one hop, skipping missing-valued neighbors.
//! let grown = expand(&graph, &[1], 1, true);
//! assert!(grown.new_nodes.contains(&0));
//! assert!(!grown.new_nodes.contains(&3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod border;
mod error;
mod expand;
mod region;

pub use border::{filter_to_region, find_border, is_border};
pub use error::{RegionError, RegionResult};
pub use expand::{expand, Expansion};
pub use region::{HighlightSet, Region, DEFAULT_PALETTE, MAX_HIGHLIGHTS};
