//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package shdoc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use shdoc_lex::{Lexer, Stream};
use shdoc_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let mut lexer = Lexer::new(Stream::in_memory("bench", source), &handler).unwrap();
    lexer.tokens().count()
}

fn bench_doc_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_doc_blocks");

    let source = "\
# @module geometry
# Helpers for planar geometry.
#
# @func area computes the area of a rectangle
#   width and height are taken from $1 and $2
geometry::area() {
    echo $(( $1 * $2 ))
}
";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("single_block", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("directive_line", |b| {
        b.iter(|| lexer_token_count(black_box("# @func area computes the area\n")))
    });

    group.finish();
}

fn bench_code_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_code_heavy");

    let source = r#"
set -euo pipefail

main() {
    local total=0
    for f in "$@"; do
        total=$(( total + $(wc -l < "$f") ))
    done
    echo "$total"
}

main "$@"
"#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mostly_code", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_large_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large_file");

    let block = "\
# @func step runs one unit of work
#   arguments are forwarded unchanged
step() {
    do_work \"$@\"
}

";
    let source = block.repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("200_blocks", |b| {
        b.iter(|| lexer_token_count(black_box(source.as_str())))
    });

    group.finish();
}

criterion_group!(benches, bench_doc_blocks, bench_code_heavy, bench_large_file);
criterion_main!(benches);
