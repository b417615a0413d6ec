// ABOUTME: Criterion benchmarks for program generation
// ABOUTME: Times every scheme, the full plan builder and the parallel comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! Criterion benchmarks for the periodization engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use liftplan::engine::{build_plan, compare_schemes, generate_program, EngineConfig};
use liftplan::models::{Goal, SchemeId, UserInput};

fn bench_schemes(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut group = c.benchmark_group("generate_program");

    for scheme in SchemeId::ALL {
        let input = UserInput::new(100.0, 5)
            .with_scheme(scheme)
            .with_goal(Goal::Strength)
            .with_weeks(Some(12));
        group.bench_with_input(BenchmarkId::from_parameter(scheme.id()), &input, |b, input| {
            b.iter(|| generate_program(black_box(input), black_box(117.0), &config));
        });
    }

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let config = EngineConfig::default();
    let input = UserInput::new(100.0, 5).with_scheme(SchemeId::TexasMethod);
    let mut group = c.benchmark_group("plan");

    group.bench_function("build_plan_texas", |b| {
        b.iter(|| build_plan(black_box(&input), &config));
    });
    group.bench_function("compare_all_schemes", |b| {
        b.iter(|| compare_schemes(black_box(&input), &config));
    });

    group.finish();
}

criterion_group!(benches, bench_schemes, bench_plan);
criterion_main!(benches);
