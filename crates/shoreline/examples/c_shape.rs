//! Concave vs convex wrap of a C-shaped point cloud.
//!
//! Purpose
//! - Show the threshold's effect on one deterministic input: a tight
//!   threshold follows the arc and exposes the gap, a huge one degrades to
//!   the convex hull.
//! - Print ring counts, vertex totals, areas, and timings for a quick
//!   eyeball check.

use std::time::Instant;

use shoreline::prelude::*;

fn main() {
    let points = draw_arc(
        ArcCfg {
            count: 160,
            ..ArcCfg::default()
        },
        ReplayToken { seed: 7, index: 0 },
    );
    println!("points={}", points.len());

    for &threshold in &[1.0, 1000.0] {
        let start = Instant::now();
        let hull = concave_hull_of_points(&points, threshold).expect("hull");
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        let vertices: usize = hull.rings.iter().map(|r| r.vertices.len()).sum();
        println!(
            "threshold={threshold} rings={} vertices={vertices} area={:.4} time_ms={elapsed:.3}",
            hull.rings.len(),
            hull.area(),
        );
    }
}
