//! Criterion benchmarks: gift wrap vs Graham scan.
//! Sizes n in {100, 1000, 5000} for each cloud distribution.
//! `circle-fixed` puts every point on the hull, so gift wrap goes quadratic there.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::cloud::{generate, CloudCfg, Distribution};
use hull2::{GiftWrap, GrahamScan, HullSolver};

fn cloud(n: usize, distribution: Distribution, seed: u64) -> Vec<hull2::Point2> {
    let cfg = CloudCfg {
        count: n,
        distribution,
        ..CloudCfg::default()
    };
    generate(&cfg, seed).expect("default bounds are valid")
}

fn bench_solvers(c: &mut Criterion) {
    for dist in Distribution::ALL {
        let mut group = c.benchmark_group(format!("hull/{dist}"));
        for &n in &[100usize, 1_000, 5_000] {
            if dist == Distribution::CircleFixed && n > 1_000 {
                group.sample_size(10);
            }
            group.bench_with_input(BenchmarkId::new("gift_wrap", n), &n, |b, &n| {
                let solver = GiftWrap::default();
                b.iter_batched(
                    || cloud(n, dist, 43),
                    |pts| solver.solve(&pts).len(),
                    BatchSize::SmallInput,
                )
            });
            group.bench_with_input(BenchmarkId::new("graham", n), &n, |b, &n| {
                let solver = GrahamScan::default().with_seed(7);
                b.iter_batched(
                    || cloud(n, dist, 43),
                    |pts| solver.solve(&pts).len(),
                    BatchSize::SmallInput,
                )
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
