//! Criterion benchmarks for the CLT sampling engine.
//!
//! Measures the sampling loop across sample sizes and the cost of the
//! normality tests on typical numbers of sample means.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use distlab_sampling::normality::{ks_normal, normality_test, shapiro_wilk};
use distlab_sampling::rng::SamplerRng;
use distlab_sampling::simulation::simulate_sampling;

/// Benchmark the sampling loop for a continuous and a discrete population.
fn bench_simulate_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_sampling");

    for name in ["Uniform[0,1]", "Binomial(10,0.3)"] {
        for sample_size in [10, 50, 200] {
            group.bench_with_input(
                BenchmarkId::new(name, sample_size),
                &sample_size,
                |b, &sample_size| {
                    let mut rng = SamplerRng::from_seed(42);
                    b.iter(|| {
                        simulate_sampling(black_box(name), sample_size, 1000, &mut rng).unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark Shapiro–Wilk and Kolmogorov–Smirnov on sample means.
fn bench_normality(c: &mut Criterion) {
    let mut group = c.benchmark_group("normality");

    for num_samples in [100, 1000, 5000] {
        let mut rng = SamplerRng::from_seed(7);
        let means = simulate_sampling("Exponential(1)", 30, num_samples, &mut rng)
            .unwrap()
            .sample_means;

        group.bench_with_input(BenchmarkId::new("shapiro_wilk", num_samples), &means, |b, means| {
            b.iter(|| shapiro_wilk(black_box(means)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("ks_normal", num_samples), &means, |b, means| {
            b.iter(|| ks_normal(black_box(means)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("combined", num_samples), &means, |b, means| {
            b.iter(|| normality_test(black_box(means)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulate_sampling, bench_normality);
criterion_main!(benches);
