//! Threshold-driven concave hulls over 2-D point sets.
//!
//! Pipeline
//! - `extract` flattens input shapes into a deduplicated point set.
//! - `delaunay` triangulates it into an arena mesh with neighbor handles.
//! - `erode` digs the boundary inward wherever an edge exceeds the length
//!   threshold, never stranding a point.
//! - `assemble` traces the surviving boundary into simple CCW rings.
//! - `hull` composes the pipeline behind [`concave_hull`].
//!
//! The computation is single-threaded, synchronous, and deterministic:
//! identical inputs and threshold always produce identical rings.

pub mod assemble;
pub mod delaunay;
pub mod erode;
pub mod error;
pub mod extract;
pub mod geom;
pub mod hull;
pub mod scatter;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, Result};
pub use hull::{concave_hull, concave_hull_of_points, Hull, HullCfg};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::assemble::HullRing;
    pub use crate::error::{HullError, Result};
    pub use crate::extract::{extract_points, PointId, PointSet, Shape};
    pub use crate::geom::GeomCfg;
    pub use crate::hull::{concave_hull, concave_hull_of_points, Hull, HullCfg};
    pub use crate::scatter::{
        draw_arc, draw_blob, draw_cluster_pair, ArcCfg, BlobCfg, ReplayToken,
    };
    pub use nalgebra::Vector2 as Vec2;
}
