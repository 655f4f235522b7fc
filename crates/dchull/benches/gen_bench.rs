//! Criterion microbenches for the point-cloud samplers.
//!
//! - draw_points over the unit square at the harness sizes.
//! - generator streaming (next) and replay (regenerate) on a disk region.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use dchull::sample::{
    draw_points, CloudCfg, PointGenerator, Region, ReplayToken, UniformPoints,
};

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen");
    for &n in &[200usize, 5000, 20_000] {
        group.bench_with_input(BenchmarkId::new("draw_points_square", n), &n, |b, &n| {
            let cfg = CloudCfg {
                count: n,
                region: Region::UnitSquare,
            };
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 },
                |mut tok| {
                    tok.index = tok.index.wrapping_add(1);
                    let _cloud = draw_points(cfg, tok);
                },
                BatchSize::SmallInput,
            )
        });
    }

    let disk = CloudCfg {
        count: 1000,
        region: Region::Disk { radius: 1.0 },
    };
    group.bench_function(BenchmarkId::new("uniform_points_next", "disk-1000"), |b| {
        b.iter_batched(
            || UniformPoints::new(disk, 11).unwrap(),
            |mut gen| {
                let _sample = gen.generate_next().unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function(BenchmarkId::new("uniform_points_regen", "disk-1000"), |b| {
        b.iter_batched(
            || {
                let mut gen = UniformPoints::new(disk, 11).unwrap();
                let sample = gen.generate_next().unwrap();
                (gen, sample.replay)
            },
            |(gen, replay)| {
                let _cloud = gen.regenerate(&replay).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
