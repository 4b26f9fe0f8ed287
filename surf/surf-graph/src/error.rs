//! Error types for graph construction and attribute binding.

use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur when binding scalar values to a graph.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A node's source index falls outside the scalar array.
    #[error("scalar index {index} out of range (array has {len} values)")]
    ValueIndexOutOfRange {
        /// The out-of-range array index.
        index: usize,
        /// Length of the scalar array.
        len: usize,
    },

    /// An index mapping does not cover the graph's nodes one-to-one.
    #[error("index mapping has {got} entries but the graph has {expected} nodes")]
    IndexCountMismatch {
        /// Number of nodes in the graph.
        expected: usize,
        /// Number of entries supplied.
        got: usize,
    },
}
