use nalgebra::{vector, Vector2};

use super::*;
use crate::error::HullError;
use crate::extract::PointId;
use crate::geom::GeomCfg;
use crate::scatter::{draw_blob, BlobCfg, ReplayToken};

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

#[test]
fn unit_square_gives_two_triangles() {
    let pts = vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
    let mesh = triangulate(pts, GeomCfg::default()).unwrap();
    assert_eq!(mesh.live_count(), 2);
    assert_eq!(mesh.boundary().len(), 4);
    assert!(mesh.check_consistency());
    // The four corners are co-circular; the strict predicate resolves the
    // tie by insertion order, putting the diagonal on {0, 2}.
    for (_, t) in mesh.iter_live() {
        let interior: Vec<usize> = (0..3).filter(|&i| t.nbr[i].is_some()).collect();
        assert_eq!(interior.len(), 1);
        assert_eq!(
            t.edge_key(interior[0]),
            EdgeKey::new(PointId(0), PointId(2))
        );
    }
}

#[test]
fn too_few_points_is_degenerate() {
    let err = triangulate(vec![v(0.0, 0.0), v(1.0, 0.0)], GeomCfg::default()).unwrap_err();
    assert_eq!(err, HullError::DegenerateGeometry { points: 2 });
}

#[test]
fn collinear_points_are_degenerate() {
    let pts: Vec<Vector2<f64>> = (0..5).map(|k| v(k as f64, 2.0 * k as f64)).collect();
    let err = triangulate(pts, GeomCfg::default()).unwrap_err();
    assert_eq!(err, HullError::DegenerateGeometry { points: 5 });
}

#[test]
fn interior_point_fans_into_three_delaunay_triangles() {
    let pts = vec![v(0.0, 0.0), v(2.0, 0.0), v(1.0, 2.0), v(1.0, 0.5)];
    let mesh = triangulate(pts, GeomCfg::default()).unwrap();
    assert_eq!(mesh.live_count(), 3);
    assert!(mesh.check_consistency());
    assert_eq!(mesh.vertex_use(PointId(3)), 3);
    // Each triangle's circumcircle excludes the one point it does not use.
    for (_, t) in mesh.iter_live() {
        let missing = (0..4)
            .map(PointId)
            .find(|p| t.position(*p).is_none())
            .unwrap();
        let (center, r) = circumcircle(
            mesh.coord(t.v[0]),
            mesh.coord(t.v[1]),
            mesh.coord(t.v[2]),
        );
        assert!((mesh.coord(missing) - center).norm() >= r - 1e-9);
    }
}

#[test]
fn random_blob_mesh_is_consistent_and_covers_every_point() {
    let pts = draw_blob(
        BlobCfg {
            count: 60,
            radius: 4.0,
            ..BlobCfg::default()
        },
        ReplayToken { seed: 9, index: 0 },
    );
    let n = pts.len();
    let mesh = triangulate(pts, GeomCfg::default()).unwrap();
    assert!(mesh.check_consistency());
    for i in 0..n {
        assert!(mesh.vertex_use(PointId(i)) >= 1, "point {i} stranded");
    }
    assert!(mesh.boundary().len() >= 3);
}

#[test]
fn random_blob_mesh_has_empty_circumcircles() {
    let pts = draw_blob(
        BlobCfg {
            count: 40,
            radius: 4.0,
            ..BlobCfg::default()
        },
        ReplayToken { seed: 5, index: 0 },
    );
    let mesh = triangulate(pts.clone(), GeomCfg::default()).unwrap();
    // Geometric slack covers the far-super fringe tolerance (extent/512)
    // near long hull chords; genuine cavity bugs overshoot it by orders of
    // magnitude.
    for (_, t) in mesh.iter_live() {
        let (center, r) = circumcircle(
            mesh.coord(t.v[0]),
            mesh.coord(t.v[1]),
            mesh.coord(t.v[2]),
        );
        for (i, p) in pts.iter().enumerate() {
            if t.position(PointId(i)).is_some() {
                continue;
            }
            assert!(
                (p - center).norm() >= r - 5e-2,
                "point {i} deep inside a circumcircle"
            );
        }
    }
}

#[test]
fn removal_updates_boundary_and_counts() {
    let pts = vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
    let mut mesh = triangulate(pts, GeomCfg::default()).unwrap();
    let (id, _) = mesh.iter_live().next().unwrap();
    mesh.remove(id);
    assert_eq!(mesh.live_count(), 1);
    assert!(!mesh.is_live(id));
    // The survivor lost its only neighbor: all three edges are boundary now.
    assert_eq!(mesh.boundary().len(), 3);
    assert!(mesh.check_consistency());
}

fn circumcircle(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
) -> (Vector2<f64>, f64) {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    let ux = (a.norm_squared() * (b.y - c.y)
        + b.norm_squared() * (c.y - a.y)
        + c.norm_squared() * (a.y - b.y))
        / d;
    let uy = (a.norm_squared() * (c.x - b.x)
        + b.norm_squared() * (a.x - c.x)
        + c.norm_squared() * (b.x - a.x))
        / d;
    let center = vector![ux, uy];
    (center, (center - a).norm())
}
