//! Delaunay construction (Bowyer–Watson incremental insertion).

use std::collections::HashMap;

use nalgebra::Vector2;

use super::types::{EdgeKey, Mesh, Tri, TriId};
use crate::error::{HullError, Result};
use crate::extract::PointId;
use crate::geom::{cross, in_circumcircle, GeomCfg};

/// Distance of the synthetic super-triangle vertices from the input, as a
/// multiple of the bounding-box extent. Far enough that fringe circumcircles
/// hug their hull chord to within extent/512; points closer than that to a
/// long hull chord may be promoted to hull vertices, which keeps the mesh
/// valid either way.
const SUPER_MARGIN: f64 = 64.0;

/// Build a Delaunay triangulation over `points` (deduplicated, finite).
///
/// Insertion order is point-id order and the in-circle predicate is strict,
/// so the result is deterministic for a given input sequence. Fewer than
/// three points, or a fully collinear set, is `DegenerateGeometry`.
pub fn triangulate(points: Vec<Vector2<f64>>, cfg: GeomCfg) -> Result<Mesh> {
    let n = points.len();
    if n < 3 {
        return Err(HullError::DegenerateGeometry { points: n });
    }

    let (min, max) = bounding_box(&points);
    let span = (max.x - min.x).max(max.y - min.y);
    debug_assert!(span > 0.0, "deduplicated points cannot coincide");

    // Collinearity pre-check against the widest available base segment: any
    // point off that line by more than the area tolerance proves a triangle
    // exists. Orientation areas scale with length², in-circle with length⁴.
    let base = points
        .iter()
        .copied()
        .max_by(|p, q| {
            let dp = (p - points[0]).norm_squared();
            let dq = (q - points[0]).norm_squared();
            dp.partial_cmp(&dq).unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(points[0]);
    let area_tol = cfg.eps_area * span * span;
    if points
        .iter()
        .all(|&p| cross(points[0], base, p).abs() <= area_tol)
    {
        return Err(HullError::DegenerateGeometry { points: n });
    }
    let circle_tol = cfg.eps_circle * span.powi(4);

    // Working vertex list: the input points plus three super-triangle
    // vertices (indices n, n+1, n+2), CCW and far outside the cloud.
    let mut verts = points;
    let center = (min + max) * 0.5;
    let m = SUPER_MARGIN * span;
    verts.push(center + Vector2::new(-m, -m));
    verts.push(center + Vector2::new(m, -m));
    verts.push(center + Vector2::new(0.0, m));

    let mut work: Vec<[usize; 3]> = vec![[n, n + 1, n + 2]];
    let mut bad: Vec<bool> = Vec::new();
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();

    for pi in 0..n {
        let p = verts[pi];

        // Cavity: triangles whose circumcircle strictly contains p. The
        // input is deduplicated, so p falls strictly inside some triangle
        // (or on an internal edge) and the cavity is never empty.
        bad.clear();
        bad.resize(work.len(), false);
        let mut any = false;
        for (ti, t) in work.iter().enumerate() {
            if in_circumcircle(verts[t[0]], verts[t[1]], verts[t[2]], p, circle_tol) {
                bad[ti] = true;
                any = true;
            }
        }
        debug_assert!(any, "insertion point must invalidate some triangle");

        // Cavity boundary: edges used by exactly one bad triangle. Keep the
        // direction from the bad triangle, so the star polygon stays CCW.
        edge_count.clear();
        for (ti, t) in work.iter().enumerate() {
            if !bad[ti] {
                continue;
            }
            for k in 0..3 {
                let (a, b) = (t[k], t[(k + 1) % 3]);
                let key = if a < b { (a, b) } else { (b, a) };
                *edge_count.entry(key).or_insert(0) += 1;
            }
        }
        let mut next: Vec<[usize; 3]> = Vec::with_capacity(work.len() + 2);
        for (ti, t) in work.iter().enumerate() {
            if !bad[ti] {
                next.push(*t);
                continue;
            }
            for k in 0..3 {
                let (a, b) = (t[k], t[(k + 1) % 3]);
                let key = if a < b { (a, b) } else { (b, a) };
                if edge_count[&key] == 1 {
                    // p is strictly interior to the star-shaped cavity, so
                    // the fan triangle inherits CCW orientation.
                    debug_assert!(
                        cross(verts[a], verts[b], p) > 0.0,
                        "cavity fan must stay counter-clockwise"
                    );
                    next.push([a, b, pi]);
                }
            }
        }
        work = next;
    }

    // Strip everything incident to the super-triangle.
    let tris: Vec<Tri> = work
        .into_iter()
        .filter(|t| t.iter().all(|&v| v < n))
        .map(|[a, b, c]| Tri {
            v: [PointId(a), PointId(b), PointId(c)],
            nbr: [None; 3],
            alive: true,
        })
        .collect();
    if tris.is_empty() {
        // Numerically collinear set that slipped past the pre-check.
        return Err(HullError::DegenerateGeometry { points: n });
    }

    verts.truncate(n);
    let mesh = link_neighbors(verts, tris);
    debug_assert!(mesh.check_consistency());
    debug_assert!(
        (0..n).all(|i| mesh.vertex_use(PointId(i)) > 0),
        "every input point must be a vertex of a live triangle"
    );
    Ok(mesh)
}

/// Assign mutual neighbor handles across shared edges.
fn link_neighbors(points: Vec<Vector2<f64>>, mut tris: Vec<Tri>) -> Mesh {
    let mut by_edge: HashMap<EdgeKey, Vec<(usize, usize)>> = HashMap::new();
    for (ti, t) in tris.iter().enumerate() {
        for i in 0..3 {
            by_edge.entry(t.edge_key(i)).or_default().push((ti, i));
        }
    }
    for occ in by_edge.values() {
        debug_assert!(occ.len() <= 2, "edge shared by more than two triangles");
        if let [(t1, e1), (t2, e2)] = occ[..] {
            tris[t1].nbr[e1] = Some(TriId(t2));
            tris[t2].nbr[e2] = Some(TriId(t1));
        }
    }
    Mesh::from_parts(points, tris)
}

fn bounding_box(points: &[Vector2<f64>]) -> (Vector2<f64>, Vector2<f64>) {
    let mut min = points[0];
    let mut max = points[0];
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}
