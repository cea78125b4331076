//! Deterministic random point clouds for tests, benches, and examples.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//! so every draw is reproducible and indexable without threading RNG state
//! through callers.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform disc of points around a center.
#[derive(Clone, Copy, Debug)]
pub struct BlobCfg {
    pub count: usize,
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Default for BlobCfg {
    fn default() -> Self {
        Self {
            count: 48,
            center: Vector2::zeros(),
            radius: 1.0,
        }
    }
}

/// Draw `cfg.count` points uniformly over the disc.
pub fn draw_blob(cfg: BlobCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            // sqrt keeps the density uniform over the disc area.
            let r = cfg.radius * rng.gen::<f64>().sqrt();
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Annular arc ("C" shape): points between two radii over an angular span,
/// leaving a gap that a concave hull should expose and a convex hull covers.
#[derive(Clone, Copy, Debug)]
pub struct ArcCfg {
    pub count: usize,
    pub r_inner: f64,
    pub r_outer: f64,
    /// Angular gap (radians) left open, centered on the positive x axis.
    pub gap: f64,
}

impl Default for ArcCfg {
    fn default() -> Self {
        Self {
            count: 96,
            r_inner: 2.0,
            r_outer: 3.0,
            gap: std::f64::consts::FRAC_PI_2,
        }
    }
}

/// Draw points along the arc: evenly spaced stations, random radius per
/// station within the band.
pub fn draw_arc(cfg: ArcCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.max(3);
    let span = std::f64::consts::TAU - cfg.gap;
    (0..n)
        .map(|k| {
            let th = cfg.gap * 0.5 + span * (k as f64 + 0.5) / n as f64;
            let r = rng.gen_range(cfg.r_inner..=cfg.r_outer);
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Two identical blobs `separation` apart on the x axis, for disconnection
/// scenarios.
pub fn draw_cluster_pair(cfg: BlobCfg, separation: f64, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let offset = Vector2::new(separation * 0.5, 0.0);
    let mut points = draw_blob(
        BlobCfg {
            center: cfg.center - offset,
            ..cfg
        },
        tok,
    );
    points.extend(draw_blob(
        BlobCfg {
            center: cfg.center + offset,
            ..cfg
        },
        ReplayToken {
            seed: tok.seed,
            index: tok.index.wrapping_add(1),
        },
    ));
    points
}
