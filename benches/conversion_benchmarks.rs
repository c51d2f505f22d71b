//! Performance benchmarks for numeral conversion
//!
//! Measures parse and format throughput over the classic 1..=3999 range
//! and over long runs of thousands.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roman::{format_into, parse, to_roman, DEFAULT_CAPACITY};
use std::hint::black_box;

/// Benchmark formatting into a reused buffer
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("classic_range", |b| {
        let mut buf = [0u8; DEFAULT_CAPACITY];
        b.iter(|| {
            for value in 1..=3999i64 {
                black_box(format_into(black_box(value), &mut buf).unwrap());
            }
        });
    });

    for thousands in &[10i64, 100, 250] {
        group.bench_with_input(
            BenchmarkId::new("thousands_run", thousands),
            thousands,
            |b, &thousands| {
                let mut buf = [0u8; DEFAULT_CAPACITY];
                b.iter(|| black_box(format_into(black_box(thousands * 1000 + 888), &mut buf)));
            },
        );
    }

    group.finish();
}

/// Benchmark parsing canonical and additive spellings
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let numerals: Vec<String> = (1..=3999i64).map(|v| to_roman(v).unwrap()).collect();
    group.bench_function("classic_range", |b| {
        b.iter(|| {
            for numeral in &numerals {
                black_box(parse(black_box(numeral)).unwrap());
            }
        });
    });

    group.bench_function("additive", |b| {
        b.iter(|| black_box(parse(black_box("MMMMDCCCCLXXXXVIIII"))));
    });

    group.finish();
}

criterion_group!(benches, bench_format, bench_parse);
criterion_main!(benches);
