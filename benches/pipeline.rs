//! Benchmarks for the gplconv pipeline.

use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gplconv::pipeline::{dedupe, sort_by_name};
use gplconv::{parse_gpl, process, Exporter, JsonExporter};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A large palette with roughly one duplicate in eight rows.
fn synthetic_palette(rows: usize) -> String {
    let mut source = String::from("GIMP Palette\nName: Synthetic\n#\n");
    for i in 0..rows {
        let v = if i % 8 == 7 { i - 7 } else { i };
        let _ = writeln!(
            source,
            "{}\t{}\t{}\tColour {:05}",
            v % 256,
            (v / 256) % 256,
            (v / 65536) % 256,
            rows - i
        );
    }
    source
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let small = load_fixture("threads.gpl");
    let large = synthetic_palette(10_000);

    group.bench_function("parse_small", |b| {
        b.iter(|| parse_gpl(black_box(&small)).unwrap())
    });

    group.bench_function("parse_large", |b| {
        b.iter(|| parse_gpl(black_box(&large)).unwrap())
    });

    group.finish();
}

// -- Normalization benchmarks --

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let parsed = parse_gpl(&synthetic_palette(10_000)).unwrap();

    group.bench_function("dedupe_10k", |b| {
        b.iter(|| dedupe(black_box(parsed.colors.clone())))
    });

    group.bench_function("sort_10k", |b| {
        b.iter(|| sort_by_name(black_box(parsed.colors.clone())))
    });

    group.finish();
}

// -- Full pipeline --

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let large = synthetic_palette(10_000);

    group.bench_function("process_10k", |b| {
        b.iter(|| process(black_box(&large)).unwrap())
    });

    let palette = process(&large).unwrap();
    group.bench_function("export_json_10k", |b| {
        b.iter(|| JsonExporter.render(black_box(&palette)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_normalize, bench_pipeline);
criterion_main!(benches);
