//! Per-node scalar values with explicit missing-ness.
//!
//! Surface maps routinely contain vertices with no measurement (masked-out
//! medial wall, dropped acquisition frames). Rather than threading raw NaN
//! through every algorithm, the missing state is a variant of [`Scalar`] and
//! NaN is normalized away at the binding boundary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar map value attached to a graph node.
///
/// `Missing` is data, not an error: it flows through neighborhood
/// aggregation, border detection, expansion, and smoothing, and each
/// algorithm defines how it is handled (skipped in means, never a maximum).
///
/// # Example
///
/// ```
/// use surf_graph::Scalar;
///
/// let present = Scalar::from_f64(2.5);
/// let missing = Scalar::from_f64(f64::NAN);
///
/// assert_eq!(present.value(), Some(2.5));
/// assert!(missing.is_missing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scalar {
    /// A defined map value.
    Value(f64),

    /// No measurement for this node.
    #[default]
    Missing,
}

impl Scalar {
    /// Convert a raw floating-point value, normalizing NaN to `Missing`.
    ///
    /// Infinities are kept as values; only NaN encodes missing-ness in the
    /// dense arrays produced by surface-map readers.
    #[inline]
    #[must_use]
    pub fn from_f64(raw: f64) -> Self {
        if raw.is_nan() {
            Self::Missing
        } else {
            Self::Value(raw)
        }
    }

    /// Get the value, or `None` if missing.
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing => None,
        }
    }

    /// Check whether this scalar is missing.
    #[inline]
    #[must_use]
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Check whether this scalar holds a value.
    #[inline]
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Get the value, or a display sentinel if missing.
    ///
    /// Intended for renderer output only; computations must go through
    /// [`Scalar::value`] so that missing-ness stays explicit.
    #[inline]
    #[must_use]
    pub const fn value_or(self, sentinel: f64) -> f64 {
        match self {
            Self::Value(v) => v,
            Self::Missing => sentinel,
        }
    }
}

impl From<f64> for Scalar {
    fn from(raw: f64) -> Self {
        Self::from_f64(raw)
    }
}
