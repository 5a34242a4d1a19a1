//! Benchmarks for key generation, sorting and filtering

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use natsort_core::{natsort, tokenize, FilterSpec, KeyOptions, NumberType};
use std::hint::black_box;

/// Generate entry names with embedded numbers
fn generate_entries(count: usize) -> Vec<String> {
    let shapes = [
        "tmp/a{}/path1",
        "IMG_{}.jpg",
        "version-1.{}.3",
        "chapter {} (draft)",
        "数据{}號",
    ];

    (0..count)
        .map(|i| shapes[i % shapes.len()].replace("{}", &((i * 7919) % 10_000).to_string()))
        .collect()
}

fn benchmark_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let entries = generate_entries(100);

    let configs = [
        ("integer", KeyOptions::default()),
        (
            "float",
            KeyOptions::builder()
                .number_type(NumberType::Float)
                .signed(true)
                .build()
                .unwrap(),
        ),
        ("path", KeyOptions::builder().as_path(true).build().unwrap()),
    ];

    for (name, options) in configs.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), options, |b, options| {
            b.iter(|| {
                for entry in &entries {
                    black_box(tokenize(black_box(entry), options));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let options = KeyOptions::default();

    for size in [100, 1_000, 10_000].iter() {
        let entries = generate_entries(*size);

        group.bench_with_input(BenchmarkId::new("sequential", size), &entries, |b, entries| {
            b.iter(|| {
                let mut items = entries.clone();
                natsort(&mut items, &options);
                black_box(items);
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &entries, |b, entries| {
            b.iter(|| {
                let mut items = entries.clone();
                natsort_core::par_natsort(&mut items, &options);
                black_box(items);
            });
        });
    }

    group.finish();
}

fn benchmark_filter(c: &mut Criterion) {
    let entries = generate_entries(1_000);
    let filter = FilterSpec::builder()
        .keep(100.0, 5_000.0)
        .exclude_value(1234.0)
        .build()
        .unwrap();

    c.bench_function("filter_1000", |b| {
        b.iter(|| black_box(filter.apply(entries.iter())));
    });
}

criterion_group!(benches, benchmark_tokenize, benchmark_sort, benchmark_filter);
criterion_main!(benches);
