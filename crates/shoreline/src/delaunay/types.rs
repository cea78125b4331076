//! Mesh data types: triangle arena, neighbor handles, boundary bookkeeping.
//!
//! Kept small and explicit so `build` and the erosion loop stay easy to read.

use nalgebra::Vector2;

use crate::extract::PointId;
use crate::geom::cross;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriId(pub usize);

/// Unordered edge stored as an ordered id pair (smaller id first).
///
/// `Ord` gives equal-length edges a deterministic processing order in the
/// erosion queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub a: PointId,
    pub b: PointId,
}

impl EdgeKey {
    #[inline]
    pub fn new(p: PointId, q: PointId) -> Self {
        debug_assert_ne!(p, q, "edge endpoints must differ");
        if p.0 <= q.0 {
            Self { a: p, b: q }
        } else {
            Self { a: q, b: p }
        }
    }
}

/// Arena triangle: CCW vertices plus the neighbor across edge
/// `v[i] → v[(i+1) % 3]` in `nbr[i]` (`None` marks a boundary edge).
#[derive(Clone, Copy, Debug)]
pub struct Tri {
    pub v: [PointId; 3],
    pub nbr: [Option<TriId>; 3],
    pub alive: bool,
}

impl Tri {
    /// Directed edge `i` in CCW order.
    #[inline]
    pub fn edge(&self, i: usize) -> (PointId, PointId) {
        (self.v[i], self.v[(i + 1) % 3])
    }

    #[inline]
    pub fn edge_key(&self, i: usize) -> EdgeKey {
        let (p, q) = self.edge(i);
        EdgeKey::new(p, q)
    }

    /// Index of `p` among the vertices, if present.
    #[inline]
    pub fn position(&self, p: PointId) -> Option<usize> {
        self.v.iter().position(|&x| x == p)
    }

    /// Index of the edge matching `key`, if this triangle has it.
    pub fn edge_index(&self, key: EdgeKey) -> Option<usize> {
        (0..3).find(|&i| self.edge_key(i) == key)
    }
}

/// The triangulation: point coordinates, the triangle arena, and the
/// live/incidence bookkeeping the eroder relies on.
///
/// Exclusively owned and mutated by the erosion pass; the assembler only
/// reads the final state.
#[derive(Clone, Debug)]
pub struct Mesh {
    points: Vec<Vector2<f64>>,
    tris: Vec<Tri>,
    vertex_use: Vec<usize>,
    live: usize,
}

impl Mesh {
    pub(crate) fn from_parts(points: Vec<Vector2<f64>>, tris: Vec<Tri>) -> Self {
        let mut vertex_use = vec![0usize; points.len()];
        for t in &tris {
            debug_assert!(t.alive);
            for &p in &t.v {
                vertex_use[p.0] += 1;
            }
        }
        let live = tris.len();
        Self {
            points,
            tris,
            vertex_use,
            live,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    #[inline]
    pub fn coord(&self, p: PointId) -> Vector2<f64> {
        self.points[p.0]
    }

    /// Consume the mesh, keeping the point coordinates.
    #[inline]
    pub fn into_points(self) -> Vec<Vector2<f64>> {
        self.points
    }

    #[inline]
    pub fn tri(&self, id: TriId) -> &Tri {
        &self.tris[id.0]
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_live(&self, id: TriId) -> bool {
        self.tris[id.0].alive
    }

    /// Number of live triangles incident to `p`.
    #[inline]
    pub fn vertex_use(&self, p: PointId) -> usize {
        self.vertex_use[p.0]
    }

    #[inline]
    pub fn edge_len(&self, k: EdgeKey) -> f64 {
        (self.points[k.a.0] - self.points[k.b.0]).norm()
    }

    /// Live triangles in arena order.
    pub fn iter_live(&self) -> impl Iterator<Item = (TriId, &Tri)> {
        self.tris
            .iter()
            .enumerate()
            .filter(|(_, t)| t.alive)
            .map(|(i, t)| (TriId(i), t))
    }

    /// Boundary edges with their single live triangle, in arena order.
    pub fn boundary(&self) -> Vec<(EdgeKey, TriId)> {
        let mut out = Vec::new();
        for (id, t) in self.iter_live() {
            for i in 0..3 {
                if t.nbr[i].is_none() {
                    out.push((t.edge_key(i), id));
                }
            }
        }
        out
    }

    /// Mark `id` dead: detach neighbor back-links and update incidence
    /// counts. The arena slot is never reused.
    pub(crate) fn remove(&mut self, id: TriId) {
        debug_assert!(self.tris[id.0].alive, "removing a dead triangle");
        let t = self.tris[id.0];
        for n in t.nbr.into_iter().flatten() {
            let back = &mut self.tris[n.0];
            for j in 0..3 {
                if back.nbr[j] == Some(id) {
                    back.nbr[j] = None;
                }
            }
        }
        for &p in &t.v {
            debug_assert!(self.vertex_use[p.0] > 0);
            self.vertex_use[p.0] -= 1;
        }
        self.tris[id.0].alive = false;
        self.live -= 1;
    }

    /// Structural checks used by tests and debug assertions: distinct CCW
    /// vertices, mutual neighbor links between live triangles, and incidence
    /// counts matching a recount.
    pub fn check_consistency(&self) -> bool {
        let mut use_count = vec![0usize; self.points.len()];
        for (id, t) in self.iter_live() {
            let [a, b, c] = t.v;
            if a == b || b == c || a == c {
                return false;
            }
            if cross(self.coord(a), self.coord(b), self.coord(c)) <= 0.0 {
                return false;
            }
            for i in 0..3 {
                if let Some(n) = t.nbr[i] {
                    if !self.is_live(n) {
                        return false;
                    }
                    let back = self.tri(n);
                    match back.edge_index(t.edge_key(i)) {
                        Some(j) if back.nbr[j] == Some(id) => {}
                        _ => return false,
                    }
                }
            }
            for &p in &t.v {
                use_count[p.0] += 1;
            }
        }
        use_count == self.vertex_use
    }
}
