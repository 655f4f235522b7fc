//! Criterion benchmarks for the divide-and-conquer hull.
//! Focus sizes: n in {200, 1000, 5000, 20000}.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;

use dchull::hull::{compute_hull, merge_hulls, Hull};
use dchull::sample::{draw_points, CloudCfg, Region, ReplayToken};

fn unit_cloud(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    draw_points(
        CloudCfg {
            count: n,
            region: Region::UnitSquare,
        },
        ReplayToken { seed, index: 0 },
    )
}

/// Two disk hulls separated on the x-axis, ready for a single merge.
fn separated_hulls(n: usize, seed: u64) -> (Hull, Hull) {
    let cfg = CloudCfg {
        count: n,
        region: Region::Disk { radius: 1.0 },
    };
    let left = compute_hull(&draw_points(cfg, ReplayToken { seed, index: 0 }));
    let shifted: Vec<Vector2<f64>> = draw_points(cfg, ReplayToken { seed, index: 1 })
        .into_iter()
        .map(|p| p + Vector2::new(3.0, 0.0))
        .collect();
    (left, compute_hull(&shifted))
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[200usize, 1000, 5000, 20_000] {
        group.bench_with_input(BenchmarkId::new("compute_hull", n), &n, |b, &n| {
            b.iter_batched(
                || unit_cloud(n, 43),
                |cloud| {
                    let _hull = compute_hull(&cloud);
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function(BenchmarkId::new("merge_hulls", "disk-2x2000"), |b| {
        b.iter_batched(
            || separated_hulls(2000, 7),
            |(left, right)| {
                let _merged = merge_hulls(&left, &right);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
