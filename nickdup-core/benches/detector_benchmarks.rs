//! Performance benchmarks for the overlap detector
//!
//! Run with: cargo bench --bench detector_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nickdup_core::matcher::{build_failure_table, search};
use nickdup_core::{Detector, Record};
use std::hint::black_box;

/// Generate `count` records with pseudo-random nicknames of 1..=20 syllables
fn generate_records(count: usize, alphabet: u32) -> Vec<Record> {
    let mut state: u32 = 0x9E37_79B9;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    (0..count)
        .map(|i| {
            let len = (next() % 20 + 1) as usize;
            let nickname: String = (0..len)
                .filter_map(|_| char::from_u32(0xAC00 + next() % alphabet))
                .collect();
            Record::new(format!("u{i}@email.com"), nickname)
        })
        .collect()
}

/// Benchmark detection across batch sizes
fn bench_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_sizes");
    let detector = Detector::new();

    for count in [100, 1_000, 10_000] {
        // A wide alphabet keeps the shared-pattern set realistic
        let records = generate_records(count, 2_000);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("detect", count), &records, |b, records| {
            b.iter(|| {
                let _ = detector.detect(black_box(records)).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark the matcher on its own
fn bench_matcher(c: &mut Criterion) {
    let text: Vec<char> = "가나다라마바사아자차카타파하".repeat(64).chars().collect();
    let pattern: Vec<char> = "하가".chars().collect();
    let table = build_failure_table(&pattern);

    c.bench_function("kmp_search", |b| {
        b.iter(|| search(black_box(&text), black_box(&pattern), black_box(&table)));
    });
}

criterion_group!(benches, bench_batch_sizes, bench_matcher);
criterion_main!(benches);
