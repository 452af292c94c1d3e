//! Kernel regression benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Training scalability (bandwidth search over 250 to 2K points)
//! - Candidate grid size and fold count
//! - Out-of-sample and leave-one-out prediction
//! - Pathological inputs (clustered x, constant y)
//!
//! For serial execution, use `FASTKERNREG_MODE=serial cargo bench`.
//! For parallel execution (default), use `FASTKERNREG_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastKernreg::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTKERNREG_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate smooth sinusoidal data with Gaussian noise.
fn generate_sine_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi.sin() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate clustered x-values (tight groups separated by gaps).
fn generate_clustered_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let jitter = Uniform::new(0.0, 0.01).unwrap();
    let noise_dist = Normal::new(0.0, 0.1).unwrap();

    let x: Vec<f64> = (0..size)
        .map(|i| (i / 50) as f64 + jitter.sample(&mut rng))
        .collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| (xi * 0.5).cos() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

fn build(folds: usize, parallel: bool) -> ParallelKernelRegression<f64> {
    KernelRegression::new()
        .folds(folds)
        .parallel(parallel)
        .build()
        .unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_training(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("training_{}", mode_name));
    group.sample_size(20);

    for size in [250, 500, 1000, 2000] {
        let (x, y) = generate_sine_data(size, 42);
        let model = build(10, use_parallel);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("fit", size), &size, |b, _| {
            b.iter(|| model.fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("candidates_{}", mode_name));
    group.sample_size(20);

    let (x, y) = generate_sine_data(1000, 42);

    for count in [5, 20, 50] {
        let bandwidths: Vec<f64> = (1..=count).map(|i| i as f64 * 2.0 / count as f64).collect();
        let model = KernelRegression::new()
            .bandwidths(&bandwidths)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("grid", count), &count, |b, _| {
            b.iter(|| model.fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_folds(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("folds_{}", mode_name));
    group.sample_size(20);

    let (x, y) = generate_sine_data(1000, 42);

    for folds in [2, 5, 10, 20] {
        let model = build(folds, use_parallel);
        group.bench_with_input(BenchmarkId::new("k", folds), &folds, |b, _| {
            b.iter(|| model.fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("prediction_{}", mode_name));
    group.sample_size(50);

    for size in [1000, 5000, 10000] {
        let (x, y) = generate_sine_data(size, 42);
        let regressor = KernelRegression::new()
            .bandwidths(&[0.2])
            .folds(2)
            .parallel(use_parallel)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap();
        let x_new: Vec<f64> = x.iter().map(|v| v + 0.005).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("out_of_sample", size), &size, |b, _| {
            b.iter(|| regressor.predict(Some(black_box(x_new.as_slice()))).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("leave_one_out", size), &size, |b, _| {
            b.iter(|| regressor.predict(black_box(None)).unwrap())
        });
    }
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(20);

    let size = 1000;
    let model = build(10, use_parallel);

    // Clustered data
    let (x_clustered, y_clustered) = generate_clustered_data(size, 42);
    group.bench_function("clustered", |b| {
        b.iter(|| {
            model
                .fit_predict(black_box(&x_clustered), black_box(&y_clustered))
                .unwrap()
        })
    });

    // Constant y
    let x_const: Vec<f64> = (0..size).map(|i| i as f64 * 0.01).collect();
    let y_const = vec![5.0; size];
    group.bench_function("constant_y", |b| {
        b.iter(|| {
            model
                .fit_predict(black_box(&x_const), black_box(&y_const))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_training,
    bench_candidates,
    bench_folds,
    bench_prediction,
    bench_pathological,
);

criterion_main!(benches);
