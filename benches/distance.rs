//! Benchmarks for the exact distance and its two bounds.

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lev_bounds::{exact_distance, lower_bound, upper_bound};
use std::hint::black_box;

/// Pseudo-random bytes; `seed` keeps the two inputs of a pair distinct.
fn generate_test_data(size: usize, seed: usize) -> Vec<u8> {
    (0..size)
        .map(|i| (i.wrapping_mul(17).wrapping_add(seed.wrapping_mul(31)) >> 3).to_le_bytes()[0])
        .collect()
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    for size in [1024usize, 4 * 1024, 16 * 1024] {
        let a = generate_test_data(size, 1);
        let b = generate_test_data(size, 2);
        group.throughput(Throughput::Bytes((2 * size) as u64));

        group.bench_with_input(BenchmarkId::new("lower", size), &size, |bench, _| {
            bench.iter(|| lower_bound(black_box(&a), black_box(&b)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("upper", size), &size, |bench, _| {
            bench.iter(|| upper_bound(black_box(&a), black_box(&b)).unwrap());
        });
        if size <= 4 * 1024 {
            group.bench_with_input(BenchmarkId::new("exact", size), &size, |bench, _| {
                bench.iter(|| exact_distance(black_box(&a), black_box(&b)).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
