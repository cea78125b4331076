//! Delaunay triangulation over the extracted point set.
//!
//! Purpose
//! - Build the arena mesh the eroder consumes: CCW triangles with mutual
//!   neighbor handles, per-vertex incidence counts, and boundary enumeration.
//! - Triangles are removed by marking handles dead, never by deallocating,
//!   so ids stay stable across the whole erosion pass.
//!
//! Algorithm
//! - Incremental Bowyer–Watson insertion over a far-away super-triangle, in
//!   point-id order, with a strict in-circle predicate (on-circle counts as
//!   outside) — both choices make the result deterministic for a given
//!   input sequence.

mod build;
mod types;

pub use build::triangulate;
pub use types::{EdgeKey, Mesh, Tri, TriId};

#[cfg(test)]
mod tests;
