//! Criterion benchmarks for polygon containment.
//! Focus sizes: n in {4, 16, 64, 256, 1024} vertices.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p pinpoly

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pinpoly::geom2::rand::{draw_points, draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use pinpoly::geom2::{segment_intersect, Point};

fn bench_in_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[4usize, 16, 64, 256, 1024] {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(n),
            radius: 10_000,
            ..StarCfg::default()
        };
        let poly = draw_star_polygon(cfg, ReplayToken { seed: 43, index: 0 }).unwrap();
        // Half the queries land outside the bounding box.
        let region = poly.bounding_box().expanded(10_000);
        let queries = draw_points(region, 256, ReplayToken { seed: 44, index: 0 });

        group.bench_with_input(BenchmarkId::new("in_polygon", n), &queries, |b, qs| {
            b.iter(|| qs.iter().filter(|&&q| poly.in_polygon(black_box(q))).count())
        });

        let inner = draw_points(poly.bounding_box(), 256, ReplayToken { seed: 45, index: 0 });
        group.bench_with_input(BenchmarkId::new("crossings", n), &inner, |b, qs| {
            b.iter(|| qs.iter().map(|&q| poly.crossings(black_box(q))).sum::<usize>())
        });
    }
    group.finish();
}

fn bench_segment_intersect(c: &mut Criterion) {
    let a = Point::new(0, 0);
    let b = Point::new(1_000_000, 1_000_000);
    let p = Point::new(0, 1_000_000);
    let q = Point::new(1_000_000, 0);
    c.bench_function("segment_intersect/proper", |bch| {
        bch.iter(|| segment_intersect(black_box(a), black_box(b), black_box(p), black_box(q)))
    });
}

criterion_group!(benches, bench_in_polygon, bench_segment_intersect);
criterion_main!(benches);
