use criterion::black_box;
use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use piest::estimate::{QUARTER_CIRCLE, SINC_SIXTH, SINC_SQUARED};
use piest::misc::{quad_eps, try_quad, try_quad_semi_infinite, QuadConfig};

const EPS: f64 = 1e-8;

fn bench_finite(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad finite");
    let config = QuadConfig::default().with_eps(EPS);

    group.bench_function("quad_eps", |b| {
        b.iter(|| {
            black_box(quad_eps(
                |x: f64| (-0.5 * (x - 2.0)).exp(),
                -3.0,
                3.0,
                Some(EPS),
            ))
        })
    });
    group.bench_function("try_quad sqrt endpoint", |b| {
        b.iter(|| {
            black_box(try_quad(|t: f64| (1.0 - t * t).sqrt(), 0.0, 1.0, &config))
        })
    });
}

fn bench_semi_infinite(c: &mut Criterion) {
    let config = QuadConfig::default();
    c.bench_function("semi-infinite e^-x", |b| {
        b.iter(|| {
            black_box(try_quad_semi_infinite(
                |x: f64| (-x).exp(),
                0.0,
                1.0,
                &config,
            ))
        })
    });
}

fn bench_integrals(c: &mut Criterion) {
    let mut group = c.benchmark_group("pi integrals");
    let config = QuadConfig::default();

    group.bench_function("int1", |b| {
        b.iter(|| black_box(SINC_SQUARED.estimate(&config)))
    });
    group.bench_function("int2", |b| {
        b.iter(|| black_box(QUARTER_CIRCLE.estimate(&config)))
    });
    group.bench_function("int3", |b| {
        b.iter(|| black_box(SINC_SIXTH.estimate(&config)))
    });
}

criterion_group!(
    quad_benches,
    bench_finite,
    bench_semi_infinite,
    bench_integrals
);
criterion_main!(quad_benches);
