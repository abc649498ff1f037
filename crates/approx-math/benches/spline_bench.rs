use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use approx_math::sampler::{build_table, NonFinitePolicy};
use approx_math::spline::{BoundaryKind, CubicSpline};

fn bench_spline(c: &mut Criterion) {
    let table = build_table(12, 0.0, 6.0, |x| x.sin(), NonFinitePolicy::Skip);

    c.bench_function("spline_fit_12_segments", |b| {
        b.iter(|| {
            CubicSpline::fit(
                black_box(&table),
                0.0,
                0.0,
                BoundaryKind::SecondDerivative,
            )
            .unwrap()
        })
    });

    let spline = CubicSpline::fit(&table, 0.0, 0.0, BoundaryKind::SecondDerivative).unwrap();
    c.bench_function("spline_eval_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            let mut x = 0.0;
            while x < 6.0 {
                acc += spline.evaluate(black_box(x));
                x += 0.01;
            }
            acc
        })
    });
}

criterion_group!(benches, bench_spline);
criterion_main!(benches);
