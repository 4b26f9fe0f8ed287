//! Mesh-connectivity graph construction and scalar attribute binding.

use hashbrown::HashMap;

use crate::error::{GraphError, GraphResult};
use crate::scalar::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undirected graph over the vertices of a triangulated surface mesh.
///
/// Nodes are the distinct vertex ids referenced by at least one face row;
/// edges connect every unordered pair of vertices that co-occur in a row.
/// A face `{a, b, c}` therefore contributes edges `{a,b}`, `{a,c}`, `{b,c}`.
/// Edge multiplicity collapses: a pair shared by many faces is one edge.
///
/// Topology is immutable once built. The only mutable state is the scalar
/// attribute, attached after construction by [`SurfaceGraph::bind_values`]
/// (or its indexed variant) and updated per node by
/// [`SurfaceGraph::set_value`].
///
/// # Node Order
///
/// Nodes are held in ascending id order, the order produced by flattening
/// and de-duplicating the face table. All node-order outputs (bound value
/// slices, display values) follow it.
///
/// # Example
///
/// ```
/// use surf_graph::SurfaceGraph;
///
/// // Two triangles sharing the edge {1, 2}
/// let graph = SurfaceGraph::from_triangles(&[[0, 1, 2], [1, 2, 3]]);
///
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 5);
/// assert!(graph.has_edge(1, 2));
/// assert!(!graph.has_edge(0, 3));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceGraph {
    /// Distinct vertex ids in ascending order.
    nodes: Vec<u32>,

    /// Node id to position in `nodes` / `adjacency` / `values`.
    index_of: HashMap<u32, usize>,

    /// De-duplicated neighbor lists, parallel to `nodes`.
    adjacency: Vec<Vec<u32>>,

    /// Bound scalar values, parallel to `nodes`. `None` until a binder runs;
    /// distinct from a bound graph whose values are [`Scalar::Missing`].
    values: Option<Vec<Scalar>>,
}

impl SurfaceGraph {
    /// Build a graph from a general face table.
    ///
    /// Each row is an ordered sequence of vertex ids (length >= 2 for a row
    /// to contribute edges; shorter or fully-degenerate rows still register
    /// their vertices as nodes). Every unordered pairwise combination within
    /// a row becomes an edge; repeated ids within a row never produce
    /// self-loops.
    ///
    /// Deterministic given the same input; vertices referenced by no face
    /// do not exist, since the node set is derived from the table itself.
    #[must_use]
    pub fn from_faces(faces: &[Vec<u32>]) -> Self {
        Self::build(faces.iter().map(Vec::as_slice))
    }

    /// Build a graph from a triangle face table.
    ///
    /// Convenience constructor for the common case of `[v0, v1, v2]` rows.
    #[must_use]
    pub fn from_triangles(faces: &[[u32; 3]]) -> Self {
        Self::build(faces.iter().map(<[u32; 3]>::as_slice))
    }

    fn build<'a>(rows: impl Iterator<Item = &'a [u32]> + Clone) -> Self {
        // Node set: flattened, de-duplicated, ascending.
        let mut nodes: Vec<u32> = rows.clone().flatten().copied().collect();
        nodes.sort_unstable();
        nodes.dedup();

        let index_of: HashMap<u32, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();

        let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); nodes.len()];
        for row in rows {
            for (i, &u) in row.iter().enumerate() {
                for &v in &row[i + 1..] {
                    if u != v {
                        Self::add_edge(&mut adjacency, &index_of, u, v);
                    }
                }
            }
        }

        Self {
            nodes,
            index_of,
            adjacency,
            values: None,
        }
    }

    /// Add an edge between two vertices (if not already present).
    fn add_edge(adjacency: &mut [Vec<u32>], index_of: &HashMap<u32, usize>, u: u32, v: u32) {
        let ui = index_of[&u];
        let vi = index_of[&v];

        if !adjacency[ui].contains(&v) {
            adjacency[ui].push(v);
        }
        if !adjacency[vi].contains(&u) {
            adjacency[vi].push(u);
        }
    }

    /// Get the number of nodes.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        // Each edge is stored twice (once per endpoint).
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Check if the graph has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over node ids in node order.
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes.iter().copied()
    }

    /// Check whether a vertex id is a node of this graph.
    #[inline]
    #[must_use]
    pub fn contains_node(&self, node: u32) -> bool {
        self.index_of.contains_key(&node)
    }

    /// Get the neighbors of a node.
    ///
    /// Returns an empty slice for ids that are not nodes of this graph;
    /// absent nodes have empty neighborhoods rather than being errors, since
    /// the traversal algorithms tolerate seeds that fall outside the graph.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, node: u32) -> &[u32] {
        self.index_of
            .get(&node)
            .map_or(&[], |&i| self.adjacency[i].as_slice())
    }

    /// Check whether an undirected edge `{u, v}` exists.
    #[must_use]
    pub fn has_edge(&self, u: u32, v: u32) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Bind a dense scalar array to the graph, one value per node, with the
    /// node id indexing the array.
    ///
    /// NaN entries become [`Scalar::Missing`]. Fails with
    /// [`GraphError::ValueIndexOutOfRange`] if any node id is not a valid
    /// index into `values`; the graph's attribute state is untouched on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns an error when a node id is >= `values.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use surf_graph::{Scalar, SurfaceGraph};
    ///
    /// let mut graph = SurfaceGraph::from_triangles(&[[0, 1, 2]]);
    /// graph.bind_values(&[1.0, 5.0, f64::NAN]).unwrap();
    ///
    /// assert_eq!(graph.value(1), Some(Scalar::Value(5.0)));
    /// assert_eq!(graph.value(2), Some(Scalar::Missing));
    /// ```
    pub fn bind_values(&mut self, values: &[f64]) -> GraphResult<()> {
        // Validate before mutating.
        for &id in &self.nodes {
            if id as usize >= values.len() {
                return Err(GraphError::ValueIndexOutOfRange {
                    index: id as usize,
                    len: values.len(),
                });
            }
        }

        self.values = Some(
            self.nodes
                .iter()
                .map(|&id| Scalar::from_f64(values[id as usize]))
                .collect(),
        );
        Ok(())
    }

    /// Bind a dense scalar array through an explicit node-order-to-index
    /// correspondence: the i-th node in node order reads
    /// `values[indices[i]]`.
    ///
    /// Use this when the scalar array is not indexed by vertex id (e.g. a
    /// resampled or reordered map).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexCountMismatch`] when `indices` does not
    /// have exactly one entry per node, and
    /// [`GraphError::ValueIndexOutOfRange`] when an entry falls outside
    /// `values`. The graph is untouched on failure.
    pub fn bind_values_indexed(&mut self, indices: &[u32], values: &[f64]) -> GraphResult<()> {
        if indices.len() != self.nodes.len() {
            return Err(GraphError::IndexCountMismatch {
                expected: self.nodes.len(),
                got: indices.len(),
            });
        }
        for &idx in indices {
            if idx as usize >= values.len() {
                return Err(GraphError::ValueIndexOutOfRange {
                    index: idx as usize,
                    len: values.len(),
                });
            }
        }

        self.values = Some(
            indices
                .iter()
                .map(|&idx| Scalar::from_f64(values[idx as usize]))
                .collect(),
        );
        Ok(())
    }

    /// Check whether scalar values have been bound.
    #[inline]
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.values.is_some()
    }

    /// Get a node's scalar value.
    ///
    /// Returns `None` when the graph is unbound or the id is not a node;
    /// returns `Some(Scalar::Missing)` for a bound node whose value is
    /// missing. The three states are deliberately distinguishable.
    #[must_use]
    pub fn value(&self, node: u32) -> Option<Scalar> {
        let values = self.values.as_ref()?;
        self.index_of.get(&node).map(|&i| values[i])
    }

    /// Get the bound values in node order, or `None` if unbound.
    #[inline]
    #[must_use]
    pub fn values(&self) -> Option<&[Scalar]> {
        self.values.as_deref()
    }

    /// Set a single node's scalar value.
    ///
    /// Ids that are not nodes are ignored. On an unbound graph this first
    /// binds every node to [`Scalar::Missing`], since a partially-set field
    /// is a bound field with missing entries.
    pub fn set_value(&mut self, node: u32, value: Scalar) {
        let node_count = self.nodes.len();
        if let Some(&i) = self.index_of.get(&node) {
            let values = self
                .values
                .get_or_insert_with(|| vec![Scalar::Missing; node_count]);
            values[i] = value;
        }
    }
}
