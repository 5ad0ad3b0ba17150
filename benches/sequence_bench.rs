//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkseq::LinkedSequence;

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_vec");
    for size in [16usize, 1_024, 65_536] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| LinkedSequence::from_vec(black_box((0..size as u64).collect())));
        });
    }
    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let seq: LinkedSequence<u64> = (0..4_096).collect();

    c.bench_function("nth_iterative_4096", |b| {
        b.iter(|| black_box(seq.nth(black_box(4_000))));
    });
    c.bench_function("nth_recursive_4096", |b| {
        b.iter(|| black_box(seq.nth_recursive(black_box(4_000))));
    });
    c.bench_function("prepend", |b| {
        b.iter(|| black_box(seq.prepend(black_box(7))));
    });
}

fn benchmark_traversal(c: &mut Criterion) {
    let seq: LinkedSequence<u64> = (0..4_096).collect();

    c.bench_function("cursor_sum_4096", |b| {
        b.iter(|| black_box(seq.iterate().sum::<u64>()));
    });
    c.bench_function("to_vec_4096", |b| {
        b.iter(|| black_box(seq.to_vec()));
    });
}

criterion_group!(benches, benchmark_construction, benchmark_lookup, benchmark_traversal);
criterion_main!(benches);
