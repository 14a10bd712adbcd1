//! Criterion benchmarks for 3D value types and comparer-backed dedup.
//! Focus sizes: n in {100, 1000, 10000} points.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geom3::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Point3D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point3D::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            )
        })
        .collect()
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");
    let a = Matrix3D::new(3.0, 12.0, 4.0, 5.0, 6.0, 8.0, 1.0, 0.0, 2.0);
    let b = Matrix3D::new(7.0, 3.0, 8.0, 11.0, 9.0, 5.0, 6.0, 8.0, 4.0);
    group.bench_function("matrix_product", |bch| {
        bch.iter(|| black_box(a) * black_box(b))
    });
    group.bench_function("rotate_axis_angle", |bch| {
        let axis = Vector3D::new(1.0, 2.0, 3.0);
        bch.iter(|| Matrix3D::rotate(black_box(&axis), black_box(0.7)))
    });
    group.bench_function("rotate_between", |bch| {
        let s = Vector3D::new(1.0, 2.0, 3.0);
        let t = Vector3D::new(1.0, -1.0, 1.0);
        bch.iter(|| Matrix3D::rotate_between(black_box(&s), black_box(&t)))
    });
    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup");
    for &n in &[100usize, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("exact", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 41),
                |pts| distinct(pts, &ExactComparer),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("raster", n), &n, |b, &n| {
            let cmp = RasterEqualityComparer::new(0.5).unwrap();
            b.iter_batched(
                || random_points(n, 42),
                |pts| distinct(pts, &cmp),
                BatchSize::SmallInput,
            )
        });
        // constant hash: quadratic, keep sizes small
        if n <= 1000 {
            group.bench_with_input(BenchmarkId::new("tolerant", n), &n, |b, &n| {
                let cmp = TolerantEqualityComparer::new(0.5).unwrap();
                b.iter_batched(
                    || random_points(n, 43),
                    |pts| distinct(pts, &cmp),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_algebra, bench_dedup);
criterion_main!(benches);
