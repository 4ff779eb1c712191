//! Criterion microbenches for the randomized quicksort against `slice::sort_by`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::cloud::{generate, CloudCfg, Distribution};
use hull2::{cmp_xy, quicksort_with};
use rand::{rngs::StdRng, SeedableRng};

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for &n in &[10usize, 1_000, 10_000] {
        let cfg = CloudCfg {
            count: n,
            distribution: Distribution::Uniform,
            ..CloudCfg::default()
        };
        let pts = generate(&cfg, 11).expect("default bounds are valid");
        group.bench_with_input(BenchmarkId::new("quicksort", n), &pts, |b, pts| {
            let mut rng = StdRng::seed_from_u64(5);
            b.iter_batched(
                || pts.clone(),
                |mut v| quicksort_with(&mut v, &mut rng),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("std_sort_by", n), &pts, |b, pts| {
            b.iter_batched(
                || pts.clone(),
                |mut v| v.sort_by(cmp_xy),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
