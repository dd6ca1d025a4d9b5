//! Performance benchmarks for directory lookups.
//!
//! These benchmarks measure the two per-keystroke operations over
//! directories of increasing size:
//! - Substring suggestions for the recipient field
//! - Exact name resolution before sending

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use wa_messenger::ContactDirectory;

fn create_directory(size: usize) -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    for i in 0..size {
        directory
            .add_contact(&format!("Contact Number {}", i), &format!("+1 555 {:07}", i))
            .expect("generated contact is valid");
    }
    directory
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    for size in [10, 100, 1_000, 10_000] {
        let directory = create_directory(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &directory, |b, dir| {
            b.iter(|| dir.suggest(black_box("number 9")).len());
        });
    }

    group.finish();
}

fn bench_find_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_name");

    for size in [10, 100, 1_000, 10_000] {
        let directory = create_directory(size);
        let last = format!("contact number {}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &directory, |b, dir| {
            b.iter(|| dir.find_by_name(black_box(&last)).is_some());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_suggest, bench_find_by_name);
criterion_main!(benches);
