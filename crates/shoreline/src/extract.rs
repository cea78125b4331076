//! Input geometry flattening (the extraction stage).
//!
//! Purpose
//! - Turn a heterogeneous list of shapes into a deduplicated, order-stable
//!   point set with dense ids, which is all the triangulator needs.
//! - The shape variants form a closed set handled by one extraction function;
//!   there is no open-ended geometry trait.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::error::{HullError, Result};

/// Closed set of input shapes. Every vertex of every variant contributes to
/// the point set; no other structure (segments, ring nesting) survives
/// extraction.
#[derive(Clone, Debug)]
pub enum Shape {
    Point(Vector2<f64>),
    Line(Vec<Vector2<f64>>),
    Polygon {
        exterior: Vec<Vector2<f64>>,
        holes: Vec<Vec<Vector2<f64>>>,
    },
}

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Deduplicated, order-stable point set.
///
/// Equality is exact on the f64 bit patterns with `-0.0` normalized to
/// `0.0`; ids are dense and assigned in first-seen order, so identical
/// inputs always produce identical ids. Coordinates must be finite
/// (documented precondition, checked in debug builds).
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    coords: Vec<Vector2<f64>>,
    index: HashMap<(u64, u64), PointId>,
}

impl PointSet {
    /// Insert a coordinate, returning the id of it or of its duplicate.
    pub fn insert(&mut self, p: Vector2<f64>) -> PointId {
        debug_assert!(
            p.x.is_finite() && p.y.is_finite(),
            "coordinates must be finite"
        );
        let key = (norm_bits(p.x), norm_bits(p.y));
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = PointId(self.coords.len());
        self.coords.push(p);
        self.index.insert(key, id);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn get(&self, id: PointId) -> Vector2<f64> {
        self.coords[id.0]
    }

    #[inline]
    pub fn coords(&self) -> &[Vector2<f64>] {
        &self.coords
    }

    /// Consume the set, keeping only the ordered coordinates.
    #[inline]
    pub fn into_coords(self) -> Vec<Vector2<f64>> {
        self.coords
    }
}

#[inline]
fn norm_bits(x: f64) -> u64 {
    // -0.0 and 0.0 compare equal, so they must dedup to the same key.
    if x == 0.0 {
        0.0f64.to_bits()
    } else {
        x.to_bits()
    }
}

/// Flatten every vertex of every shape into a deduplicated point set.
///
/// An empty shape list, or one whose shapes carry no coordinates, is
/// `EmptyInput`.
pub fn extract_points(shapes: &[Shape]) -> Result<PointSet> {
    let mut set = PointSet::default();
    for shape in shapes {
        match shape {
            Shape::Point(p) => {
                set.insert(*p);
            }
            Shape::Line(pts) => {
                for p in pts {
                    set.insert(*p);
                }
            }
            Shape::Polygon { exterior, holes } => {
                for p in exterior {
                    set.insert(*p);
                }
                for ring in holes {
                    for p in ring {
                        set.insert(*p);
                    }
                }
            }
        }
    }
    if set.is_empty() {
        return Err(HullError::EmptyInput);
    }
    Ok(set)
}
