//! Benchmark – trimming and classification over short script tokens
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use scriptlex::{NumericOptions, classify, ltrim, string_to_int64, trim};

/// Inputs a tokenizer sees most: already-clean words, and words with a little
/// padding on either side.
const CASES: [(&str, &[u8]); 4] = [
    ("clean", b"VariableName"),
    ("leading", b"   VariableName"),
    ("trailing", b"VariableName \t "),
    ("both", b"\t VariableName  "),
];

fn terminated(text: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(text.len() + 1);
    buf.extend_from_slice(text);
    buf.push(0);
    buf
}

fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim");
    for (name, text) in CASES {
        let source = terminated(text);
        group.bench_with_input(BenchmarkId::new("ltrim", name), &source, |b, src| {
            let mut buf = src.clone();
            b.iter(|| {
                buf.copy_from_slice(src);
                black_box(ltrim(black_box(&mut buf), Some(src.len() - 1)));
            });
        });
        group.bench_with_input(BenchmarkId::new("trim", name), &source, |b, src| {
            let mut buf = src.clone();
            b.iter(|| {
                buf.copy_from_slice(src);
                black_box(trim(black_box(&mut buf), None));
            });
        });
    }
    group.finish();
}

fn bench_numeric(c: &mut Criterion) {
    let options = NumericOptions {
        allow_negative: true,
        allow_float: true,
        ..NumericOptions::default()
    };
    let mut group = c.benchmark_group("numeric");
    let texts: [&[u8]; 4] = [b"12345", b"-0x7fffffff", b"3.14159e0", b"not_a_number"];
    for text in texts {
        let name = String::from_utf8_lossy(text).into_owned();
        group.bench_with_input(BenchmarkId::new("classify", &name), text, |b, t| {
            b.iter(|| black_box(classify(black_box(t), &options)));
        });
        group.bench_with_input(BenchmarkId::new("string_to_int64", &name), text, |b, t| {
            b.iter(|| black_box(string_to_int64(black_box(t))));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_trim, bench_numeric }
criterion_main!(benches);
