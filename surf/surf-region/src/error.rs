//! Error types for region operations.

use thiserror::Error;

/// Result type for region operations.
pub type RegionResult<T> = Result<T, RegionError>;

/// Errors that can occur during region operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegionError {
    /// A highlight set already holds its maximum number of regions.
    #[error("highlight set is full (at most {max} highlighted regions)")]
    TooManyHighlights {
        /// The highlight capacity.
        max: usize,
    },
}
