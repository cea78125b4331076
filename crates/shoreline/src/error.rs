//! Error types for concave-hull computation.
//!
//! All variants are input-validation failures detected before any partial
//! result exists; there is no retry semantic.

use thiserror::Error;

/// Result type alias using [`HullError`].
pub type Result<T> = std::result::Result<T, HullError>;

/// Errors surfaced by the hull pipeline.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum HullError {
    /// No input shapes, or the shapes carried no coordinates at all.
    #[error("no input geometries or extracted points")]
    EmptyInput,

    /// The erosion threshold must be a positive, finite length.
    #[error("threshold must be a positive length, got {threshold}")]
    InvalidThreshold {
        /// The rejected threshold value.
        threshold: f64,
    },

    /// Fewer than three distinct points, or all points collinear; no triangle
    /// can be formed, so a hull is undefined. The caller may substitute a
    /// convex hull, a line, or a single point based on `points`.
    #[error("degenerate input: {points} distinct point(s), no triangle constructible")]
    DegenerateGeometry {
        /// Number of distinct points after deduplication.
        points: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let e = HullError::InvalidThreshold { threshold: -1.0 };
        assert!(format!("{e}").contains("-1"));
        let e = HullError::DegenerateGeometry { points: 2 };
        assert!(format!("{e}").contains('2'));
    }
}
