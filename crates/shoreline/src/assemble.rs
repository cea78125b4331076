//! Boundary-ring assembly.
//!
//! Directed boundary edges keep their live triangle on the left, so every
//! face-connected component traces into one simple CCW exterior ring. The
//! successor of `u → v` is found by rotating around `v` through live
//! triangles until the next boundary edge out of `v`; components that touch
//! only at a pinch vertex therefore split into separate rings instead of one
//! self-touching circuit.
//!
//! Interior hole rings cannot arise: erosion only ever removes triangles
//! adjacent to the boundary, which never opens a cavity in a mesh that
//! starts as a triangulated disk.

use std::collections::HashSet;

use crate::delaunay::{Mesh, TriId};
use crate::extract::PointId;

/// One closed exterior ring: CCW vertex ids in traversal order, first vertex
/// not repeated at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HullRing {
    pub vertices: Vec<PointId>,
}

/// Trace every boundary circuit of `mesh` into rings, in arena order.
pub fn assemble(mesh: &Mesh) -> Vec<HullRing> {
    let mut visited: HashSet<(PointId, PointId)> = HashSet::new();
    let mut rings = Vec::new();
    for (tid, tri) in mesh.iter_live() {
        for i in 0..3 {
            if tri.nbr[i].is_some() {
                continue;
            }
            let (u, v) = tri.edge(i);
            if visited.contains(&(u, v)) {
                continue;
            }
            rings.push(trace_ring(mesh, tid, i, &mut visited));
        }
    }
    rings
}

/// Walk one boundary circuit starting from boundary edge `start_edge` of
/// `start_tri`, marking every directed edge it consumes.
fn trace_ring(
    mesh: &Mesh,
    start_tri: TriId,
    start_edge: usize,
    visited: &mut HashSet<(PointId, PointId)>,
) -> HullRing {
    let mut vertices = Vec::new();
    let (mut tid, mut ei) = (start_tri, start_edge);
    loop {
        let tri = mesh.tri(tid);
        debug_assert!(tri.nbr[ei].is_none(), "walk must sit on a boundary edge");
        let (u, v) = tri.edge(ei);
        if !visited.insert((u, v)) {
            break; // circuit closed
        }
        vertices.push(u);

        // Rotate around `v`: the candidate edge out of `v` in the current
        // triangle is the one at `v`'s own index; cross interior edges until
        // it is a boundary edge.
        let (mut cur, mut pivot) = (tid, (ei + 1) % 3);
        debug_assert_eq!(mesh.tri(cur).v[pivot], v);
        loop {
            let t = mesh.tri(cur);
            match t.nbr[pivot] {
                None => {
                    tid = cur;
                    ei = pivot;
                    break;
                }
                Some(next) => {
                    let nt = mesh.tri(next);
                    debug_assert!(nt.alive);
                    pivot = nt.position(v).expect("neighbor shares the pivot vertex");
                    cur = next;
                }
            }
        }
    }
    HullRing { vertices }
}
