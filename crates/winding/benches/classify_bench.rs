//! Criterion benchmarks for winding-number classification.
//! Focus sizes: polygons in {1, 10, 100}, 10k points.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p winding

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use winding::api::{classify_points, draw_scene, Point, Polygon, SceneCfg, SceneReplay};

fn bench_winding_number(c: &mut Criterion) {
    let poly = Polygon::rectangle(0.0, 0.0, 5.0, 5.0);
    let p = Point::new(2.5, 1.0);
    c.bench_function("winding_number_rectangle", |b| {
        b.iter(|| black_box(&poly).winding_number(black_box(p)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for &m in &[1usize, 10, 100] {
        let cfg = SceneCfg {
            n_points: 10_000,
            n_polygons: m,
            ..SceneCfg::default()
        };
        let scene = draw_scene(cfg, SceneReplay::new(43, m as u64));
        group.bench_with_input(BenchmarkId::new("classify_points", m), &scene, |b, s| {
            b.iter(|| classify_points(&s.points, &s.polygons))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_winding_number, bench_classify);
criterion_main!(benches);
