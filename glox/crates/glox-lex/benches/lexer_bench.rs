//! Scanner benchmarks
//!
//! Run with: `cargo bench --package glox-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use glox_lex::{scan, Scanner};

fn token_count(source: &str) -> usize {
    Scanner::new(source).count()
}

fn bench_scanner_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "var x = 42; fun main() { var y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| {
        b.iter(|| token_count(black_box("var x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_program");

    let source = r#"
        // Recursive fibonacci
        fun fib(n) {
            if (n <= 1) return n;
            return fib(n - 1) + fib(n - 2);
        }

        class Point {
            init(x, y) {
                this.x = x;
                this.y = y;
            }

            show() {
                print "Point at " + this.x + ", " + this.y;
            }
        }

        var i = 0;
        while (i < 10) {
            print fib(i);
            i = i + 1;
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("program", |b| b.iter(|| token_count(black_box(source))));

    let large = source.repeat(200);
    group.throughput(Throughput::Bytes(large.len() as u64));

    group.bench_function("large_program_to_vec", |b| {
        b.iter(|| scan(black_box(&large)).map(|tokens| tokens.len()))
    });

    group.finish();
}

fn bench_scanner_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_literals");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("var s = \"hello\";")))
    });

    group.bench_function("multiline_string", |b| {
        let source = "var s = \"line one\nline two\nline three of a longer string\";";
        b.iter(|| token_count(black_box(source)))
    });

    group.bench_function("integer", |b| {
        b.iter(|| token_count(black_box("var x = 123456;")))
    });

    group.bench_function("fraction", |b| {
        b.iter(|| token_count(black_box("var x = 3.14159;")))
    });

    group.finish();
}

fn bench_scanner_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_identifiers");

    group.bench_function("long_ident", |b| {
        b.iter(|| token_count(black_box("var very_long_variable_name = 42;")))
    });

    group.bench_function("keyword_heavy", |b| {
        b.iter(|| {
            token_count(black_box(
                "and class else false for fun if nil or print return super this true var while",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scanner_statements,
    bench_scanner_program,
    bench_scanner_literals,
    bench_scanner_identifiers
);
criterion_main!(benches);
