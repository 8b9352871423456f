use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cartography::prelude::*;

fn criterion_benchmark(c: &mut Criterion) {
    let solver = KeplerSolver::default();

    c.bench_function("solve_kepler", |b| {
        b.iter(|| {
            let m = black_box(2.7);
            solver.solve(black_box(0.2056), m);
        })
    });

    c.bench_function("solve_kepler_high_ecc", |b| {
        b.iter(|| {
            let m = black_box(0.05);
            solver.solve(black_box(0.966321), m);
        })
    });

    let grid = linspace(0.0, 2.0 * PI, 360);

    c.bench_function("solve_kepler_sweep", |b| {
        b.iter(|| {
            for m in &grid {
                solver.solve(0.5, black_box(*m));
            }
        })
    });

    let catalog = Catalog::presets();
    let mercury = catalog.elements("Mercury").unwrap();
    let halley = catalog.elements("1P/Halley").unwrap();
    let sampler = TimeSampler::default();

    c.bench_function("sample_mercury", |b| {
        b.iter(|| {
            sampler.sample(black_box(&mercury));
        })
    });

    c.bench_function("sample_halley", |b| {
        b.iter(|| {
            sampler.sample(black_box(&halley));
        })
    });

    let curve = sampler.sample(&mercury);

    c.bench_function("percent_at", |b| {
        b.iter(|| {
            let t = black_box(32.5);
            curve.percent_at(t);
        })
    });

    c.bench_function("build_presets", |b| {
        b.iter(|| {
            black_box(&catalog).build().unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
