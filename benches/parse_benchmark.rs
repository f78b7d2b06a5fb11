//! Benchmarks for vaccert parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test the pipeline with synthetic certificate data.

use std::io::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flate2::write::ZlibEncoder;
use flate2::Compression;

/// Creates a synthetic certificate with identity-coded text and a small
/// remap table in the last stream.
fn create_test_certificate(extra_lines: usize) -> Vec<u8> {
    let mut lines: Vec<String> = vec![
        "Персональные данные".to_string(),
        "Ковалев Сергей Юрьевич".to_string(),
        "28-10-1965".to_string(),
        "Мужской".to_string(),
        "Документ удостоверяющий личность".to_string(),
        "5009 №715855".to_string(),
        "Вторая вакцинация".to_string(),
        "Гам-КОВИД-Вак".to_string(),
        "03.08.2021".to_string(),
        "Дата введения вакцины:".to_string(),
    ];
    for i in 0..extra_lines {
        lines.push(format!("дополнительная строка {}", i));
    }

    let mut content = Vec::new();
    for line in &lines {
        content.extend_from_slice(b"\n(");
        for ch in line.chars() {
            content.extend_from_slice(&(ch as u32 as u16).to_be_bytes());
        }
        content.extend_from_slice(b")Tj\n");
    }

    let mut doc = b"%PDF-1.4\n".to_vec();
    for stream in [content.as_slice(), b"<0000><0041><0041>".as_slice()] {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(stream).unwrap();
        let compressed = encoder.finish().unwrap();

        doc.extend_from_slice(b"stream\n");
        doc.extend_from_slice(&compressed);
        doc.extend_from_slice(b"\nendstream\n");
    }
    doc
}

/// Benchmark full certificate parsing.
fn bench_parse(c: &mut Criterion) {
    let small = create_test_certificate(0);
    let large = create_test_certificate(500);

    c.bench_function("parse_bytes_small", |b| {
        b.iter(|| vaccert::parse_bytes(black_box(&small)).unwrap());
    });

    c.bench_function("parse_bytes_large", |b| {
        b.iter(|| vaccert::parse_bytes(black_box(&large)).unwrap());
    });
}

/// Benchmark the content layer alone.
fn bench_extract_lines(c: &mut Criterion) {
    let doc = create_test_certificate(100);

    c.bench_function("extract_lines", |b| {
        b.iter(|| vaccert::extract_lines(black_box(&doc)));
    });
}

criterion_group!(benches, bench_parse, bench_extract_lines);
criterion_main!(benches);
