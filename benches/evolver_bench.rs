//! Criterion benchmarks for the evolutionary TSP optimizer.
//!
//! Uses seeded random instances so every sample evolves the same
//! population, measuring pure algorithm cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tsp_evolve::{EvolveConfig, Instance, Optimizer};

fn instance(cities: usize) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC17135);
    Instance::random(cities, 1000.0, 1000.0, &mut rng)
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimizer_step");
    for cities in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(cities), &cities, |b, &cities| {
            let config = EvolveConfig::default()
                .with_max_generations(usize::MAX - 1)
                .with_stagnation_limit(usize::MAX)
                .with_seed(42);
            let mut optimizer = Optimizer::new(instance(cities), config).unwrap();
            b.iter(|| black_box(optimizer.step().unwrap()));
        });
    }
    group.finish();
}

fn bench_run_to_convergence(c: &mut Criterion) {
    c.bench_function("optimizer_run_30_cities", |b| {
        b.iter(|| {
            let config = EvolveConfig::default()
                .with_max_generations(200)
                .with_stagnation_limit(30)
                .with_seed(42);
            let mut optimizer = Optimizer::new(instance(30), config).unwrap();
            black_box(optimizer.run().unwrap())
        });
    });
}

criterion_group!(benches, bench_step, bench_run_to_convergence);
criterion_main!(benches);
