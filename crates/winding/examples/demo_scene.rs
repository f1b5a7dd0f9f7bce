//! Classify a random scene and print how many points landed inside.
//!
//! Usage: cargo run -p winding --example demo_scene [seed]

use winding::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);
    let cfg = SceneCfg::default();
    let scene = draw_scene(cfg, ReplayToken { seed, index: 0 });
    let results = classify_points(&scene.points, &scene.polygons);
    let inside = results.iter().filter(|r| r.is_inside()).count();
    println!(
        "seed={seed} points={} polygons={} inside={inside} outside={}",
        scene.points.len(),
        scene.polygons.len(),
        results.len() - inside
    );
}
