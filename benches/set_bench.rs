//! Set construction, lookup and algebra benchmarks.
//!
//! Compares `of` against incremental `insert`, and measures the combining
//! operations on overlapping sets of growing size. Input vectors are built
//! once per size and cloned in setup so that generation is not measured.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use uniset::Set;

const SIZES: [u64; 4] = [100, 1_000, 10_000, 100_000];

/// Returns the appropriate `BatchSize` for the input size.
const fn batch_size_for(size: u64) -> BatchSize {
    if size < 1_000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

/// Two sets of `size` elements each, overlapping by half.
fn overlapping_pair(size: u64) -> (Set<u64>, Set<u64>) {
    (Set::of(0..size), Set::of(size / 2..size + size / 2))
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_construction");

    for size in SIZES {
        let base: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("of", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base.clone(),
                |elements| black_box(Set::of(black_box(elements))),
                batch_size_for(size),
            );
        });

        group.bench_with_input(BenchmarkId::new("insert", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base.clone(),
                |elements| {
                    let mut set = Set::new();
                    for element in elements {
                        set.insert(black_box(element));
                    }
                    black_box(set)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_contains");

    for size in SIZES {
        let set = Set::of(0..size);
        group.bench_with_input(BenchmarkId::new("hit_and_miss", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0_usize;
                for probe in (0..size * 2).step_by(7) {
                    if set.contains(black_box(&probe)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

fn benchmark_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra");

    for size in SIZES {
        let (left, right) = overlapping_pair(size);

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.union(black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.intersection(black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.difference(black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("is_subset", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.is_subset(black_box(&left))));
        });
    }

    group.finish();
}

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_filter");

    for size in SIZES {
        let set = Set::of(0..size);
        group.bench_with_input(BenchmarkId::new("filter", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.filter(|element| element % 3 == 0)));
        });
        group.bench_with_input(BenchmarkId::new("retain", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || set.clone(),
                |mut cloned| {
                    cloned.retain(|element| element % 3 == 0);
                    black_box(cloned)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_contains,
    benchmark_algebra,
    benchmark_filter
);
criterion_main!(benches);
