//! Named node subsets and renderer highlights.
//!
//! A [`Region`] is a named subset of graph nodes, optionally carrying a
//! display color. A [`HighlightSet`] collects up to
//! [`MAX_HIGHLIGHTS`] regions for a renderer to draw over the scalar map.

use hashbrown::HashSet;
use surf_graph::SurfaceGraph;

use crate::border::{filter_to_region, find_border};
use crate::error::{RegionError, RegionResult};
use crate::expand::expand;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of regions a [`HighlightSet`] can hold.
pub const MAX_HIGHLIGHTS: usize = 3;

/// Default highlight palette (RGB), assigned in insertion order.
pub const DEFAULT_PALETTE: [(u8, u8, u8); MAX_HIGHLIGHTS] = [
    (255, 255, 255), // white
    (0, 0, 0),       // black
    (255, 192, 203), // pink
];

/// A named region of a surface graph, defined by node ids.
///
/// # Example
///
/// ```
/// use surf_region::Region;
///
/// let region = Region::from_nodes("precentral", [10, 11, 12]);
/// assert_eq!(region.name(), "precentral");
/// assert_eq!(region.len(), 3);
/// assert!(region.contains(11));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Unique name for this region.
    name: String,

    /// Node ids that belong to this region.
    nodes: HashSet<u32>,

    /// Optional color for visualization (RGB, 0-255).
    color: Option<(u8, u8, u8)>,
}

impl Region {
    /// Create an empty region with a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: HashSet::new(),
            color: None,
        }
    }

    /// Create a region from node ids.
    #[must_use]
    pub fn from_nodes(name: impl Into<String>, nodes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.into(),
            nodes: nodes.into_iter().collect(),
            color: None,
        }
    }

    /// Set the display color (builder style).
    #[must_use]
    pub const fn with_color(mut self, r: u8, g: u8, b: u8) -> Self {
        self.color = Some((r, g, b));
        self
    }

    /// Get the region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the display color, if one is set.
    #[must_use]
    pub const fn color(&self) -> Option<(u8, u8, u8)> {
        self.color
    }

    /// Get the number of nodes in the region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the region is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check membership of a node id.
    #[must_use]
    pub fn contains(&self, node: u32) -> bool {
        self.nodes.contains(&node)
    }

    /// Add a node to the region.
    pub fn insert(&mut self, node: u32) {
        self.nodes.insert(node);
    }

    /// Iterate over the region's node ids (unordered).
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes.iter().copied()
    }

    /// The region's node set.
    #[must_use]
    pub const fn as_set(&self) -> &HashSet<u32> {
        &self.nodes
    }

    /// The region's border nodes: members with a neighbor outside the
    /// region, in ascending id order. See [`find_border`].
    ///
    /// The region stores its members unordered; sorting them before the
    /// border scan keeps the output deterministic across runs.
    #[must_use]
    pub fn border(&self, graph: &SurfaceGraph) -> Vec<u32> {
        let mut members: Vec<u32> = self.nodes.iter().copied().collect();
        members.sort_unstable();
        find_border(graph, &members)
    }

    /// Restrict a candidate set to this region. See [`filter_to_region`].
    #[must_use]
    pub fn filter(&self, candidates: &HashSet<u32>) -> HashSet<u32> {
        filter_to_region(&self.nodes, candidates)
    }

    /// Grow this region outward by `stepsize` hops, returning the grown
    /// region (name and color preserved). See [`expand`].
    #[must_use]
    pub fn expand(&self, graph: &SurfaceGraph, stepsize: u32, ignore_missing: bool) -> Self {
        let members: Vec<u32> = self.nodes.iter().copied().collect();
        let grown = expand(graph, &members, stepsize, ignore_missing);

        let mut nodes = self.nodes.clone();
        nodes.extend(grown.new_nodes);
        Self {
            name: self.name.clone(),
            nodes,
            color: self.color,
        }
    }
}

/// Up to [`MAX_HIGHLIGHTS`] regions for a renderer to overlay on the map.
///
/// Regions added without a color receive the next entry of
/// [`DEFAULT_PALETTE`].
///
/// # Example
///
/// ```
/// use surf_region::{HighlightSet, Region};
///
/// let mut highlights = HighlightSet::new();
/// highlights.add(Region::from_nodes("seeds", [0, 1])).unwrap();
/// highlights.add(Region::from_nodes("peaks", [5]).with_color(255, 0, 0)).unwrap();
///
/// assert_eq!(highlights.len(), 2);
/// // The first region took the first palette entry.
/// assert_eq!(highlights.regions()[0].color(), Some((255, 255, 255)));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighlightSet {
    regions: Vec<Region>,
}

impl HighlightSet {
    /// Create an empty highlight set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region to the highlight set.
    ///
    /// A region without a color is assigned the next default palette entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::TooManyHighlights`] when the set already holds
    /// [`MAX_HIGHLIGHTS`] regions.
    pub fn add(&mut self, mut region: Region) -> RegionResult<()> {
        if self.regions.len() >= MAX_HIGHLIGHTS {
            return Err(RegionError::TooManyHighlights {
                max: MAX_HIGHLIGHTS,
            });
        }
        if region.color.is_none() {
            let (r, g, b) = DEFAULT_PALETTE[self.regions.len()];
            region = region.with_color(r, g, b);
        }
        self.regions.push(region);
        Ok(())
    }

    /// Get the number of highlighted regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if no regions are highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// The highlighted regions in insertion order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}
