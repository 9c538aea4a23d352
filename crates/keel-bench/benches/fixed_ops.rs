//! Criterion micro-benchmarks for FixedArray access against a bare array.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use keel_fixed::FixedArray;

const S: usize = 256;

/// Benchmark: fill then sum a 256-element array.
fn bench_fill_and_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_sum_256");
    group.bench_function("fixed_array", |b| {
        let mut array: FixedArray<u32, S> = FixedArray::new();
        b.iter(|| {
            array.fill(black_box(3));
            black_box(array.iter().sum::<u32>());
        });
    });
    group.bench_function("bare_array", |b| {
        let mut array = [0u32; S];
        b.iter(|| {
            array.fill(black_box(3));
            black_box(array.iter().sum::<u32>());
        });
    });
    group.finish();
}

/// Benchmark: checked against unchecked indexed writes.
fn bench_indexed_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_write_256");
    group.bench_function("checked", |b| {
        let mut array: FixedArray<u32, S> = FixedArray::new();
        b.iter(|| {
            for i in 0..S {
                array[i] = i as u32;
            }
            black_box(array[S - 1]);
        });
    });
    group.bench_function("unchecked", |b| {
        let mut array: FixedArray<u32, S> = FixedArray::new();
        b.iter(|| {
            for i in 0..S {
                // SAFETY: i < S.
                unsafe { *array.get_unchecked_mut(i) = i as u32 };
            }
            black_box(array[S - 1]);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_fill_and_sum, bench_indexed_write);
criterion_main!(benches);
