//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package limboc-lex`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use limboc_lex::{lex, lex_files};
use limboc_util::{SourceFile, SourceMap};

fn source_file(source: &str) -> Arc<SourceFile> {
    SourceMap::new().add_file("bench.b", source)
}

fn lexer_token_count(file: &Arc<SourceFile>) -> usize {
    lex(file).map(|tokens| tokens.len()).unwrap_or(0)
}

const PROGRAM: &str = r#"implement Fib;

include "sys.m";
	sys: Sys;
include "draw.m";

Fib: module
{
	init: fn(ctxt: ref Draw->Context, argv: list of string);
};

fib(n: int): big
{
	if(n <= 1)
		return big n;
	return fib(n - 1) + fib(n - 2);
}

init(nil: ref Draw->Context, argv: list of string)
{
	sys = load Sys Sys->PATH;
	for(i := 0; i < 20; i++)
		sys->print("fib(%d) = %bd\n", i, fib(i));   # print the series
	mask := 16rFF00 | 2r1010;
	scale := 3.5e-2 * 16r1.8;
	c := 'x';
}
"#;

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let simple = source_file("x := 42;");
    let program = source_file(PROGRAM);
    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("simple_assignment", |b| {
        b.iter(|| lexer_token_count(black_box(&simple)))
    });

    group.bench_function("program", |b| {
        b.iter(|| lexer_token_count(black_box(&program)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    let short = source_file("s := \"hello\";");
    let escaped = source_file(
        "s := \"This is a longer string with \\t tabs, \\\"quotes\\\" and newlines\\n.\";",
    );

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box(&short)))
    });

    group.bench_function("escaped_string", |b| {
        b.iter(|| lexer_token_count(black_box(&escaped)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    for (name, source) in [
        ("integer", "x := 123456;"),
        ("real", "x := 3.14159e2;"),
        ("radix", "x := 16rDEADBEEF;"),
        ("radix_real", "x := 16r1.8e1;"),
    ] {
        let file = source_file(source);
        group.bench_function(name, |b| b.iter(|| lexer_token_count(black_box(&file))));
    }

    group.finish();
}

fn bench_lex_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex_files");

    let mut map = SourceMap::new();
    let files: Vec<_> = (0..64)
        .map(|i| map.add_file(format!("f{}.b", i), PROGRAM))
        .collect();
    group.throughput(Throughput::Bytes((PROGRAM.len() * files.len()) as u64));

    group.bench_function("parallel_64_files", |b| {
        b.iter(|| lex_files(black_box(&files)).len())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lex_files
);
criterion_main!(benches);
