//! Benchmark for the idiom helpers: select, flatten, `flatten_dict`, call and
//! random streams.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambars_idioms::flatten::{DictNode, Nested, flatten, flatten_dict};
use lambars_idioms::generate::{call, random_digits_with};
use lambars_idioms::predicate::{Constraint, Operator, Resolver};
use lambars_idioms::select::select;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::hint::black_box;

// =============================================================================
// Select Benchmarks
// =============================================================================

fn benchmark_select(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("select");

    for size in [10, 100, 1000] {
        let subjects: BTreeMap<usize, usize> = (0..size).map(|key| (key, key * 7 % 13)).collect();
        let constraints: BTreeMap<usize, Constraint<usize>> = (0..size)
            .map(|key| (key, Constraint::new(Operator::Less, 6)))
            .collect();

        group.bench_with_input(BenchmarkId::new("operators", size), &size, |bencher, _| {
            bencher.iter(|| {
                select(black_box(&subjects), &constraints, Resolver::Direct)
                    .map(Iterator::count)
                    .unwrap_or_default()
            });
        });
    }

    group.finish();
}

// =============================================================================
// Flatten Benchmarks
// =============================================================================

fn deep_list(depth: usize) -> Nested<usize> {
    (0..depth).fold(Nested::Leaf(0), |inner, level| {
        Nested::Branch(vec![Nested::Leaf(level), inner])
    })
}

fn wide_tree(width: u32, depth: u32) -> DictNode<u32, u32> {
    if depth == 0 {
        DictNode::Value(width)
    } else {
        DictNode::branch((0..width).map(|key| (key, wide_tree(width, depth - 1))))
    }
}

fn benchmark_flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten");

    for depth in [10, 100, 1000] {
        let nested = deep_list(depth);
        group.bench_with_input(BenchmarkId::new("deep_list", depth), &nested, |bencher, nested| {
            bencher.iter(|| flatten(black_box(nested.clone())).sum::<usize>());
        });
    }

    for depth in [2, 4, 6] {
        let tree = wide_tree(4, depth);
        let root = match &tree {
            DictNode::Branch(children) => children.clone(),
            DictNode::Value(_) => BTreeMap::new(),
        };
        group.bench_with_input(BenchmarkId::new("flatten_dict", depth), &root, |bencher, root| {
            bencher.iter(|| flatten_dict(black_box(root)).count());
        });
    }

    group.finish();
}

// =============================================================================
// Generator Benchmarks
// =============================================================================

fn benchmark_generators(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("generators");

    group.bench_function("call_times_1000", |bencher| {
        bencher.iter(|| call(|value: u64| value + 1, (black_box(41),)).times(1000).sum::<u64>());
    });

    group.bench_function("random_digits_until_zero", |bencher| {
        bencher.iter(|| {
            random_digits_with(StdRng::seed_from_u64(black_box(17)))
                .until(0)
                .take(1000)
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_select, benchmark_flatten, benchmark_generators);
criterion_main!(benches);
