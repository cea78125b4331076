//! The public concave-hull operation.
//!
//! Composes the pipeline: validate the threshold, extract and deduplicate
//! points, triangulate, erode, assemble. Every error is surfaced before any
//! partial result exists; a returned [`Hull`] is always fully assembled.

use nalgebra::Vector2;

use crate::assemble::{assemble, HullRing};
use crate::delaunay::triangulate;
use crate::erode::erode;
use crate::error::{HullError, Result};
use crate::extract::{extract_points, PointSet, Shape};
use crate::geom::{ring_signed_area, GeomCfg};

/// Concave-hull configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Maximum edge length tolerated on the hull boundary, in input units.
    /// Longer boundary edges are eroded away wherever topology allows.
    pub threshold: f64,
    pub geom: GeomCfg,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            geom: GeomCfg::default(),
        }
    }
}

/// Concave-hull result: the deduplicated input points and one CCW exterior
/// ring per face-connected component of the eroded mesh.
///
/// More than one ring means erosion disconnected the input into separate
/// clusters — a valid outcome, not an error. Every input point lies on or
/// inside some ring; ring vertices reference only original points.
#[derive(Clone, Debug)]
pub struct Hull {
    pub points: Vec<Vector2<f64>>,
    pub rings: Vec<HullRing>,
}

impl Hull {
    /// Ring coordinates in traversal order, closed (first = last).
    pub fn ring_coords(&self, ring: &HullRing) -> Vec<Vector2<f64>> {
        let mut out: Vec<Vector2<f64>> =
            ring.vertices.iter().map(|&p| self.points[p.0]).collect();
        if let Some(&first) = out.first() {
            out.push(first);
        }
        out
    }

    /// Enclosed area of one ring (positive; rings are CCW).
    pub fn ring_area(&self, ring: &HullRing) -> f64 {
        let verts: Vec<Vector2<f64>> =
            ring.vertices.iter().map(|&p| self.points[p.0]).collect();
        ring_signed_area(&verts)
    }

    /// Total enclosed area across all rings.
    pub fn area(&self) -> f64 {
        self.rings.iter().map(|r| self.ring_area(r)).sum()
    }
}

/// Compute the concave hull of `shapes` under `cfg`.
pub fn concave_hull(shapes: &[Shape], cfg: &HullCfg) -> Result<Hull> {
    check_threshold(cfg.threshold)?;
    let set = extract_points(shapes)?;
    hull_of_set(set, cfg)
}

/// Concave hull of a raw coordinate slice (duplicates welcome), with default
/// tolerances.
pub fn concave_hull_of_points(points: &[Vector2<f64>], threshold: f64) -> Result<Hull> {
    check_threshold(threshold)?;
    let mut set = PointSet::default();
    for &p in points {
        set.insert(p);
    }
    if set.is_empty() {
        return Err(HullError::EmptyInput);
    }
    let cfg = HullCfg {
        threshold,
        ..HullCfg::default()
    };
    hull_of_set(set, &cfg)
}

fn check_threshold(threshold: f64) -> Result<()> {
    // NaN fails the comparison, so a single check covers sign and finiteness.
    if threshold > 0.0 && threshold.is_finite() {
        Ok(())
    } else {
        Err(HullError::InvalidThreshold { threshold })
    }
}

fn hull_of_set(set: PointSet, cfg: &HullCfg) -> Result<Hull> {
    if set.len() < 3 {
        return Err(HullError::DegenerateGeometry { points: set.len() });
    }
    let mut mesh = triangulate(set.into_coords(), cfg.geom)?;
    erode(&mut mesh, cfg.threshold);
    let rings = assemble(&mesh);
    debug_assert!(!rings.is_empty());
    Ok(Hull {
        points: mesh.into_points(),
        rings,
    })
}
