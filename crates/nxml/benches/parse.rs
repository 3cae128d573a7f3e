use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use nxml::{from_str, to_string};

const SIMPLE_XML: &str = r#"<?xml version="1.0"?><root><child>text</child></root>"#;
const CATALOG_XML: &str = include_str!("../tests/fixtures/catalog.xml");

fn bench_simple(c: &mut Criterion) {
    c.bench_function("nxml_parse_simple", |b| {
        b.iter(|| from_str(black_box(SIMPLE_XML)))
    });
}

fn bench_catalog(c: &mut Criterion) {
    c.bench_function("nxml_parse_catalog", |b| {
        b.iter(|| from_str(black_box(CATALOG_XML)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let Ok(doc) = from_str(CATALOG_XML) else {
        return;
    };
    c.bench_function("nxml_serialize_catalog", |b| {
        b.iter(|| to_string(black_box(&doc)))
    });
}

criterion_group!(benches, bench_simple, bench_catalog, bench_serialize);
criterion_main!(benches);
