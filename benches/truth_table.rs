//! Truth table generation benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench truth_table
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use truth_table_rs::annotate::annotate_default;
use truth_table_rs::lexer::tokenize;
use truth_table_rs::parser::parse_tokens;
use truth_table_rs::table::TruthTable;

const INPUTS: &[(&str, &str)] = &[
    ("one-var", "p∨¬p"),
    ("three-vars", "(p→q)∧(q→r)→(p→r)"),
    ("five-vars", "¬p∧q∨r→s↔t"),
    ("five-vars-nested", "((p↔q)∧(r∨¬s))→¬(t∧(p∨(q→¬r)))"),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &(name, input) in INPUTS {
        let tokens = tokenize(input);
        let table = TruthTable::generate(&tokens).unwrap();
        group.throughput(Throughput::Elements(table.num_rows() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &tokens, |b, tokens| {
            b.iter(|| TruthTable::generate(black_box(tokens)))
        });
    }
    group.finish();
}

fn bench_parse_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_annotate");
    for &(name, input) in INPUTS {
        let tokens = tokenize(input);
        group.bench_with_input(BenchmarkId::from_parameter(name), &tokens, |b, tokens| {
            b.iter(|| parse_tokens(black_box(tokens)).map(|expr| annotate_default(&expr)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_parse_annotate);
criterion_main!(benches);
