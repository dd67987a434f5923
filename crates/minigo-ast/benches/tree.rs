// Tree benchmarks for the MiniGo AST
//
// These benchmarks measure list growth, dumping and teardown on wide
// (long blocks) and deep (nested operator chains) trees.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use minigo_ast::{Node, dump, free};

/// Builds a block of `n` statements of the form `x := x + i`.
fn wide_block(n: i64) -> Node {
    let mut block = Node::block();
    for i in 0..n {
        let sum = Node::binary_op("+", Node::identifier("x"), Node::int_literal(i));
        block
            .add_statement(Node::decl_assignment("x", sum))
            .expect("block accepts statements");
    }
    block
}

/// Builds `-(-(...(-x)))` nested `depth` times.
fn deep_chain(depth: usize) -> Node {
    let mut expr = Node::identifier("x");
    for _ in 0..depth {
        expr = Node::unary_op("-", expr);
    }
    expr
}

/// Appends to argument lists of increasing size.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for n in [4usize, 64, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut args = Node::arg_list();
                for i in 0..n {
                    args.add_argument(Node::int_literal(i as i64))
                        .expect("arg list accepts arguments");
                }
                black_box(args)
            })
        });
    }

    group.finish();
}

/// Dumps a wide block to a string.
fn bench_dump(c: &mut Criterion) {
    let tree = wide_block(1_000);

    c.bench_function("dump_wide_block", |b| b.iter(|| dump(black_box(&tree))));
}

/// Tears down wide and deep trees.
fn bench_teardown(c: &mut Criterion) {
    c.bench_function("free_wide_block", |b| {
        b.iter_batched(|| wide_block(1_000), |tree| free(Some(tree)), BatchSize::LargeInput)
    });

    c.bench_function("free_deep_chain", |b| {
        b.iter_batched(|| deep_chain(10_000), |tree| free(Some(tree)), BatchSize::LargeInput)
    });
}

criterion_group!(benches, bench_append, bench_dump, bench_teardown);
criterion_main!(benches);
