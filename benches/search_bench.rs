//! Criterion benchmarks for both search engines on the reference
//! 10 classrooms × 6 timeslots grid with 28 courses.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slotplan::ga::{GaConfig, GaRunner};
use slotplan::pso::{PsoConfig, PsoRunner};
use slotplan::{GridConfig, Schedule};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reference_grid() -> GridConfig {
    GridConfig::new(10, 6, 28).unwrap()
}

fn bench_fitness(c: &mut Criterion) {
    let grid = reference_grid();
    let mut rng = StdRng::seed_from_u64(42);
    let schedule = Schedule::random_distinct(&grid, &mut rng);

    c.bench_function("fitness/10x6x28", |b| {
        b.iter(|| black_box(grid.fitness(black_box(&schedule))))
    });
}

fn bench_ga(c: &mut Criterion) {
    let grid = reference_grid();
    let mut group = c.benchmark_group("ga");

    for &generations in &[10usize, 50] {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_generations(generations)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(generations),
            &config,
            |b, config| b.iter(|| GaRunner::run(black_box(&grid), config).unwrap()),
        );
    }
    group.finish();
}

fn bench_pso(c: &mut Criterion) {
    let grid = reference_grid();
    let mut group = c.benchmark_group("pso");

    for &iterations in &[10usize, 50] {
        let config = PsoConfig::default()
            .with_num_particles(50)
            .with_iterations(iterations)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &config,
            |b, config| b.iter(|| PsoRunner::run(black_box(&grid), config).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_ga, bench_pso);
criterion_main!(benches);
