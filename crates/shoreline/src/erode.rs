//! Boundary erosion, the concave-hull core loop.
//!
//! Pops the longest current boundary edge; while it exceeds the threshold,
//! the single live triangle behind it is removed — unless removal would
//! strand one of its vertices, in which case the edge stays on the boundary
//! for good. Connectivity and full point coverage take precedence over
//! strict threshold adherence.
//!
//! Each removal strictly shrinks the live set, so the loop is bounded by the
//! initial triangle count. Incidence counts only ever decrease, which means
//! a blocked removal can never become legal later; blocked edges are not
//! re-queued.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::delaunay::{EdgeKey, Mesh, TriId};

/// Heap entry: boundary edge keyed by length, longest first. Equal lengths
/// are processed smaller id pair first, so runs are reproducible.
#[derive(Clone, Copy, Debug)]
struct QueuedEdge {
    len: f64,
    key: EdgeKey,
}

impl PartialEq for QueuedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for QueuedEdge {}
impl PartialOrd for QueuedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueuedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len
            .total_cmp(&other.len)
            .then_with(|| other.key.cmp(&self.key))
    }
}

/// Erode boundary triangles until no removable boundary edge exceeds
/// `threshold`. Threshold validation happens upstream; erosion itself is
/// infallible.
pub fn erode(mesh: &mut Mesh, threshold: f64) {
    // Boundary edge → its single live triangle. An edge enters the boundary
    // at most once (interior → boundary → gone is monotone), so each edge is
    // pushed at most once.
    let mut boundary: HashMap<EdgeKey, TriId> = mesh.boundary().into_iter().collect();
    let mut heap: BinaryHeap<QueuedEdge> = BinaryHeap::with_capacity(boundary.len());
    let mut enqueued: HashSet<EdgeKey> = HashSet::with_capacity(boundary.len());
    for &key in boundary.keys() {
        heap.push(QueuedEdge {
            len: mesh.edge_len(key),
            key,
        });
        enqueued.insert(key);
    }

    while let Some(QueuedEdge { len, key }) = heap.pop() {
        if len <= threshold {
            // Max-heap: every remaining boundary edge fits as well.
            break;
        }
        // Stale entry: the edge left the boundary when its triangle was
        // removed through another side.
        let Some(&tid) = boundary.get(&key) else {
            continue;
        };
        debug_assert!(mesh.is_live(tid));
        let tri = *mesh.tri(tid);
        debug_assert!(tri.edge_index(key).is_some());

        // Removability: no vertex of the triangle may drop to zero live
        // incident triangles.
        if !tri.v.iter().all(|&p| mesh.vertex_use(p) >= 2) {
            // Permanent boundary: the edge keeps exceeding the threshold,
            // but removing the triangle would strand a point.
            #[cfg(debug_assertions)]
            if std::env::var_os("SHORELINE_DEBUG_ERODE").is_some() {
                eprintln!("keep edge {key:?} (len={len:.6}): removal would strand a vertex");
            }
            continue;
        }

        // Remove the triangle; its other two sides change boundary status.
        boundary.remove(&key);
        for i in 0..3 {
            let k = tri.edge_key(i);
            if k == key {
                continue;
            }
            match tri.nbr[i] {
                Some(n) => {
                    // Newly exposed: the surviving neighbor now owns a
                    // boundary edge.
                    debug_assert!(mesh.is_live(n));
                    boundary.insert(k, n);
                    if enqueued.insert(k) {
                        heap.push(QueuedEdge {
                            len: mesh.edge_len(k),
                            key: k,
                        });
                    }
                }
                None => {
                    // This side was boundary too and just lost its only
                    // triangle; it leaves the boundary entirely.
                    boundary.remove(&k);
                }
            }
        }
        mesh.remove(tid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delaunay::triangulate;
    use crate::extract::PointId;
    use crate::geom::GeomCfg;
    use nalgebra::{vector, Vector2};

    /// Outer triangle with an interior point near the bottom edge: a fan of
    /// three triangles whose two slanted hull edges measure √5.
    fn fan_points() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 2.0],
            vector![1.0, 0.5],
        ]
    }

    #[test]
    fn square_is_untouched_at_threshold_two() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        let mut mesh = triangulate(pts, GeomCfg::default()).unwrap();
        erode(&mut mesh, 2.0);
        assert_eq!(mesh.live_count(), 2);
        assert_eq!(mesh.boundary().len(), 4);
    }

    #[test]
    fn one_slanted_edge_erodes_then_coverage_blocks() {
        let mut mesh = triangulate(fan_points(), GeomCfg::default()).unwrap();
        assert_eq!(mesh.live_count(), 3);
        // Both √5 hull edges exceed 2.1. The smaller id pair {0, 2} erodes
        // first; the second removal would strand point 2 and is blocked.
        erode(&mut mesh, 2.1);
        assert_eq!(mesh.live_count(), 2);
        let boundary: Vec<EdgeKey> = mesh.boundary().into_iter().map(|(k, _)| k).collect();
        assert!(boundary.contains(&EdgeKey::new(PointId(1), PointId(2))));
        assert_eq!(boundary.len(), 4);
        assert!(mesh.check_consistency());
        for i in 0..4 {
            assert!(mesh.vertex_use(PointId(i)) >= 1);
        }
    }

    #[test]
    fn tiny_threshold_still_strands_nothing() {
        let mut mesh = triangulate(fan_points(), GeomCfg::default()).unwrap();
        erode(&mut mesh, 0.1);
        // Every further removal would isolate a vertex, so the same two
        // triangles survive as at threshold 2.1.
        assert_eq!(mesh.live_count(), 2);
        for i in 0..4 {
            assert!(mesh.vertex_use(PointId(i)) >= 1);
        }
    }

    #[test]
    fn huge_threshold_is_a_no_op() {
        let mut mesh = triangulate(fan_points(), GeomCfg::default()).unwrap();
        let before = mesh.live_count();
        erode(&mut mesh, 1000.0);
        assert_eq!(mesh.live_count(), before);
    }
}
