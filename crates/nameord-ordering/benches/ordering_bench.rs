//! Ordering benchmarks.
//!
//! Measures `build_ordering` on the two shapes that stress it most: long
//! dependency chains (deep SCC recursion) and wide cycles (one large
//! component with many blamed edges).

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nameord_common::{Location, LocationMap, SourceId};
use nameord_env::EnvironmentMap;
use nameord_ordering::build_ordering;
use nameord_syntax::Definition;
use nameord_syntax::ast::{Expression, FunctionBody, FunctionSyntax, Statement};

fn loc(offset: u32) -> Location {
    Location::new(SourceId(0), offset, offset + 1)
}

/// `const a0 = 0; const a1 = a0; ... const aN = aN-1;`
fn chain(n: u32) -> (EnvironmentMap, LocationMap<Definition>) {
    let mut env = EnvironmentMap::new();
    let mut definitions = LocationMap::default();
    for i in 0..n {
        let def_loc = loc(i * 2);
        env = env.declare(def_loc);
        let init = if i == 0 {
            Expression::number(loc(i * 2 + 1), 0.0)
        } else {
            let read_loc = loc(i * 2 + 1);
            env = env.with_write(read_loc, loc((i - 1) * 2));
            Expression::identifier(read_loc, format!("a{}", i - 1))
        };
        definitions.insert(def_loc, Definition::value(init));
    }
    (env, definitions)
}

/// `n` unannotated functions, each calling the next and the first.
fn ring(n: u32) -> (EnvironmentMap, LocationMap<Definition>) {
    let mut env = EnvironmentMap::new();
    let mut definitions = LocationMap::default();
    for i in 0..n {
        let def_loc = loc(i * 4);
        let next_read = loc(i * 4 + 1);
        let first_read = loc(i * 4 + 2);
        env = env
            .with_write(next_read, loc(((i + 1) % n) * 4))
            .with_write(first_read, loc(0));
        let body = vec![
            Statement::expression(Expression::call(
                loc(i * 4 + 3),
                Expression::identifier(next_read, "next"),
                vec![Expression::identifier(first_read, "first")],
            )),
        ];
        let function = FunctionSyntax::new(def_loc, FunctionBody::Block(body));
        definitions.insert(def_loc, Definition::function(function));
    }
    (env, definitions)
}

fn bench_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering_chain");

    for n in [100u32, 1_000, 10_000] {
        let (env, definitions) = chain(n);
        group.bench_with_input(BenchmarkId::new("bindings", n), &definitions, |b, defs| {
            b.iter(|| black_box(build_ordering(&env, defs)))
        });
    }

    group.finish();
}

fn bench_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering_cycle");

    for n in [10u32, 100, 1_000] {
        let (env, definitions) = ring(n);
        group.bench_with_input(BenchmarkId::new("functions", n), &definitions, |b, defs| {
            b.iter(|| black_box(build_ordering(&env, defs)))
        });
    }

    group.finish();
}

criterion_group!(ordering_benches, bench_chains, bench_cycles);
criterion_main!(ordering_benches);
