//! Scanner throughput benchmarks for `jsonlex_core`.
//!
//! Measures pure tokenization: no diagnostics, no error conversion. Tokens
//! are consumed in a tight loop without collecting into a `Vec`.

use std::fmt::Write as _;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jsonlex_core::{SourceBuffer, Scanner};

/// Generate an array of `n` small records.
fn generate_n_records(n: usize) -> String {
    let mut out = String::from("[");
    for i in 0..n {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(
            out,
            "\n  {{\"id\": {i}, \"name\": \"record \\\"{i}\\\"\", \"score\": -{i}.5e-3, \"active\": true, \"tags\": [\"a\", \"b\", null]}}"
        );
    }
    out.push_str("\n]");
    out
}

fn bench_scanner_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("jsonlex_core/scanner/throughput");

    for num_records in [10, 100, 1000, 10_000] {
        let source = generate_n_records(num_records);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_records),
            &source,
            |b, src| {
                b.iter(|| {
                    let buf = SourceBuffer::new(src);
                    let mut scanner = Scanner::new(buf.cursor());
                    loop {
                        let tok = scanner.next_token();
                        if tok.is_end() {
                            break;
                        }
                        black_box(tok);
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scanner_throughput);
criterion_main!(benches);
