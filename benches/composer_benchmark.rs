#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for joint plot composition and Vega-Lite encoding.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cosilico::prelude::*;

fn frame(size: usize) -> DataFrame {
    let x: Vec<f64> = (0..size).map(|i| (i as f64 * 0.37).sin() * 10.0 + (i % 13) as f64).collect();
    let y: Vec<f64> = x.iter().enumerate().map(|(i, v)| v * 0.5 + (i % 7) as f64).collect();
    let labels = ["setosa", "versicolor", "virginica"];
    let mut df = DataFrame::from_xy(&x, &y);
    df.add_column_str("species", &(0..size).map(|i| labels[i % 3]).collect::<Vec<_>>());
    df
}

fn compose_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("jointplot");

    for (name, kind) in [("histogram", MarginalKind::Histogram), ("density", MarginalKind::DensityArea)] {
        let options = JointOptions::default().with_group("species").with_marginal_kind(kind);
        for size in [100, 1_000, 10_000] {
            let data = frame(size);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| jointplot(black_box(&data), "x", "y", &options).unwrap());
            });
        }
    }

    group.finish();
}

fn encode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_vega_lite");

    for size in [100, 1_000, 10_000] {
        let figure = jointplot(&frame(size), "x", "y", &JointOptions::default()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(&figure).to_vega_lite());
        });
    }

    group.finish();
}

criterion_group!(benches, compose_benchmark, encode_benchmark);
criterion_main!(benches);
