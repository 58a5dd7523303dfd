//! Performance benchmarks for fast-floats operations.
//!
//! Run with: `cargo bench -p fast-floats`
//!
//! These benchmarks measure throughput for each operation across input
//! sizes to confirm linear scaling and establish baselines.

#![allow(clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fast_floats::ops::{add_all, add_all_to, add_const, add_to, cum_prod, cum_sum, dot, norm, sum};

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Deterministic series for reproducible runs.
fn generate_series(size: usize, phase: f64) -> Vec<f64> {
    (0..size)
        .map(|i| ((i as f64 * 0.1 + phase).sin() * 2.0) + ((i as f64 * 0.03).cos() * 1.5))
        .collect()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in SIZES {
        let a = generate_series(size, 0.0);
        let b = generate_series(size, 1.0);
        let mut dst = vec![0.0_f64; size];

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("add_to", size), &size, |bench, _| {
            bench.iter(|| add_to(black_box(&mut dst), black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_add_variadic(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_variadic");
    let size = 10_000;

    for rows in [2_usize, 4, 8, 16] {
        let data: Vec<Vec<f64>> = (0..rows)
            .map(|r| generate_series(size, r as f64))
            .collect();
        let mut dst = vec![0.0_f64; size];

        group.throughput(Throughput::Elements((size * rows) as u64));
        group.bench_with_input(BenchmarkId::new("add_all_to", rows), &rows, |bench, _| {
            bench.iter(|| add_all_to(black_box(&mut dst), black_box(&data)));
        });
        group.bench_with_input(BenchmarkId::new("add_all", rows), &rows, |bench, _| {
            bench.iter(|| add_all(black_box(&mut dst), black_box(&data[1..])));
        });
    }

    group.finish();
}

fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("cumulative");

    for size in SIZES {
        let s = generate_series(size, 0.5);
        let mut dst = vec![0.0_f64; size];

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("cum_sum", size), &size, |bench, _| {
            bench.iter(|| cum_sum(black_box(&mut dst), black_box(&s)));
        });
        group.bench_with_input(BenchmarkId::new("cum_prod", size), &size, |bench, _| {
            bench.iter(|| cum_prod(black_box(&mut dst), black_box(&s)));
        });
    }

    group.finish();
}

fn bench_scalar_and_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_reduce");

    for size in SIZES {
        let a = generate_series(size, 0.0);
        let b = generate_series(size, 2.0);
        let mut s = a.clone();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("add_const", size), &size, |bench, _| {
            bench.iter(|| add_const(black_box(1e-9), black_box(&mut s)));
        });
        group.bench_with_input(BenchmarkId::new("sum", size), &size, |bench, _| {
            bench.iter(|| sum(black_box(&a)));
        });
        group.bench_with_input(BenchmarkId::new("dot", size), &size, |bench, _| {
            bench.iter(|| dot(black_box(&a), black_box(&b)));
        });
        group.bench_with_input(BenchmarkId::new("norm_l2", size), &size, |bench, _| {
            bench.iter(|| norm(black_box(&a), 2.0));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_add_variadic,
    bench_scans,
    bench_scalar_and_reductions
);
criterion_main!(benches);
