//! Criterion micro-benchmarks for DynamicArray appends, iteration and
//! mixed workloads, against `Vec` and `SmallVec` baselines.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keel_bench::{append_only, mixed_profile, replay, replay_on_vec, Op, LARGE, SMALL};
use keel_test_utils::Vec3;
use keel_vector::DynamicArray;
use smallvec::SmallVec;

fn values(ops: &[Op]) -> Vec<u64> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Push(v) => Some(*v),
            _ => None,
        })
        .collect()
}

/// Benchmark: push `n` u64 values from an empty container.
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for n in [SMALL, LARGE] {
        let input = values(&append_only(42, n));
        group.bench_with_input(BenchmarkId::new("dynamic_array", n), &input, |b, input| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for &v in input {
                    array.push(v);
                }
                black_box(array.size());
            });
        });
        group.bench_with_input(BenchmarkId::new("vec", n), &input, |b, input| {
            b.iter(|| {
                let mut vec = Vec::new();
                for &v in input {
                    vec.push(v);
                }
                black_box(vec.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("smallvec_16", n), &input, |b, input| {
            b.iter(|| {
                let mut vec: SmallVec<[u64; SMALL]> = SmallVec::new();
                for &v in input {
                    vec.push(v);
                }
                black_box(vec.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: the three append flavours on a small aggregate element.
fn bench_append_flavours(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_vec3");
    let template = Vec3::new(1.0, 2.0, 3.0);
    group.bench_function("push_clone", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for _ in 0..LARGE {
                array.push_clone(black_box(&template));
            }
            black_box(array.size());
        });
    });
    group.bench_function("push", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for i in 0..LARGE {
                array.push(Vec3::splat(i as f32));
            }
            black_box(array.size());
        });
    });
    group.bench_function("emplace", |b| {
        b.iter(|| {
            let mut array: DynamicArray<Vec3> = DynamicArray::new();
            for i in 0..LARGE {
                array.emplace((i as f32, 0.0f32, 1.0f32));
            }
            black_box(array.size());
        });
    });
    group.finish();
}

/// Benchmark: sum 10K values by cursor walk, by iterator and by index.
fn bench_iterate(c: &mut Criterion) {
    let array: DynamicArray<u64> = values(&append_only(7, LARGE)).into_iter().map(|v| v >> 16).collect();
    let mut group = c.benchmark_group("iterate_10k");
    group.bench_function("cursor", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            let mut it = array.begin();
            let end = array.end();
            while it != end {
                sum = sum.wrapping_add(*it);
                it.step_forward();
            }
            black_box(sum);
        });
    });
    group.bench_function("iter", |b| {
        b.iter(|| black_box(array.iter().fold(0u64, |acc, v| acc.wrapping_add(*v))));
    });
    group.bench_function("index", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..array.size() {
                sum = sum.wrapping_add(array[i]);
            }
            black_box(sum);
        });
    });
    group.finish();
}

/// Benchmark: replay a 10K-operation mixed profile.
fn bench_mixed_profile(c: &mut Criterion) {
    let ops = mixed_profile(42, LARGE);
    let mut group = c.benchmark_group("mixed_10k");
    group.bench_function("dynamic_array", |b| {
        b.iter(|| black_box(replay(black_box(&ops)).size()));
    });
    group.bench_function("vec", |b| {
        b.iter(|| black_box(replay_on_vec(black_box(&ops)).len()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_append_flavours,
    bench_iterate,
    bench_mixed_profile
);
criterion_main!(benches);
