use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use prompt_catalog::catalog::EMBEDDED_CSV;
use prompt_catalog::parsers::csv::parse_document;
use prompt_catalog::parsers::records::load_prompts;

/// Generate a catalog with quoted, multi-line and plain rows
fn generate_catalog(num_rows: usize) -> String {
    let mut text = String::from("act,prompt,for_devs,type,contributor\n");
    for i in 0..num_rows {
        let row = match i % 3 {
            0 => format!("Plain {},Act as helper {},FALSE,TEXT,user{}\n", i, i, i % 20),
            1 => format!(
                "Quoted {},\"Reply with \"\"yes\"\" or \"\"no\"\", then stop\",TRUE,STRUCTURED,\n",
                i
            ),
            _ => format!("Multi {},\"First line\nSecond line, {}\",,IMAGE,user{}\n", i, i, i % 20),
        };
        text.push_str(&row);
    }
    text
}

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_parsing");

    for size in [100, 1_000, 10_000].iter() {
        let text = generate_catalog(*size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_document", size), size, |b, _| {
            b.iter(|| parse_document(black_box(&text)));
        });
        group.bench_with_input(BenchmarkId::new("load_prompts", size), size, |b, _| {
            b.iter(|| load_prompts(black_box(&text)));
        });
    }

    group.finish();
}

fn bench_bundled_catalog(c: &mut Criterion) {
    c.bench_function("load_bundled_catalog", |b| {
        b.iter(|| load_prompts(black_box(EMBEDDED_CSV)));
    });
}

criterion_group!(benches, bench_parse_document, bench_bundled_catalog);
criterion_main!(benches);
