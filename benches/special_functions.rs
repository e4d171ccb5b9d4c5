//! Per-call cost of the special functions across their evaluation regimes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use specfun::prelude::*;
use std::hint::black_box;

/// One argument pair per regime: finite sum, series, continued fraction, Temme
fn bench_incomplete_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma_p");
    for &(a, x) in &[(4.0, 3.0), (2.3, 0.4), (3.7, 25.0), (500.0, 510.0)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("a={a},x={x}")),
            &(a, x),
            |b, &(a, x)| b.iter(|| gamma_p(black_box(a), black_box(x))),
        );
    }
    group.finish();
}

/// Small-x Temme series, CF2 and long recurrences in the order
fn bench_bessel(c: &mut Criterion) {
    let mut group = c.benchmark_group("bessel");
    for &(v, x) in &[(0.3, 1.5), (2.5, 8.0), (40.5, 10.0)] {
        let id = format!("v={v},x={x}");
        group.bench_with_input(BenchmarkId::new("bessel_i", &id), &(v, x), |b, &(v, x)| {
            b.iter(|| bessel_i(black_box(v), black_box(x)))
        });
        group.bench_with_input(BenchmarkId::new("bessel_k", &id), &(v, x), |b, &(v, x)| {
            b.iter(|| bessel_k(black_box(v), black_box(x)))
        });
        group.bench_with_input(BenchmarkId::new("log_bessel_i", &id), &(v, x), |b, &(v, x)| {
            b.iter(|| log_bessel_i(black_box(v), black_box(x)))
        });
    }
    group.finish();
}

fn bench_zeta(c: &mut Criterion) {
    let mut group = c.benchmark_group("zeta");
    for &s in &[-7.5, 0.5, 5.0, 9.5] {
        group.bench_with_input(BenchmarkId::from_parameter(s), &s, |b, &s| {
            b.iter(|| zeta(black_box(s)))
        });
    }
    group.finish();
}

/// Asymptotic series, the ζ-based near-zero series and reflection
fn bench_polygamma(c: &mut Criterion) {
    c.bench_function("digamma", |b| b.iter(|| digamma(black_box(3.7))));
    c.bench_function("trigamma", |b| b.iter(|| trigamma(black_box(-2.3))));

    let mut group = c.benchmark_group("polygamma");
    for &(n, x) in &[(3, 60.0), (3, 0.1), (12, -1.3)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n={n},x={x}")),
            &(n, x),
            |b, &(n, x)| b.iter(|| polygamma(black_box(n), black_box(x))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_incomplete_gamma,
    bench_bessel,
    bench_zeta,
    bench_polygamma
);
criterion_main!(benches);
