//! Criterion benchmarks for quantity arithmetic and conversion

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use measure_core::{AbsorbedDose, AmountsExt, Measure, MeasuresExt};
use std::time::Duration;

fn custom_criterion() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .warm_up_time(Duration::from_millis(200))
        .measurement_time(Duration::from_secs(2))
}

fn bench_value_arithmetic(c: &mut Criterion) {
    let a = AbsorbedDose::new_in(2.0_f32, AbsorbedDose::milli_gray());
    let b = AbsorbedDose::new_in(0.003_f32, AbsorbedDose::gray());

    c.bench_function("value_add", |bench| {
        bench.iter(|| black_box(a) + black_box(b))
    });

    c.bench_function("value_ratio", |bench| {
        bench.iter(|| black_box(a) / black_box(b))
    });
}

fn bench_measure_arithmetic(c: &mut Criterion) {
    let a = Measure::new(2.0_f32, AbsorbedDose::milli_gray());
    let b = Measure::new(0.003_f32, AbsorbedDose::gray());

    c.bench_function("measure_add_cross_unit", |bench| {
        bench.iter(|| black_box(a) + black_box(b))
    });

    c.bench_function("measure_compare_cross_unit", |bench| {
        bench.iter(|| black_box(a) < black_box(b))
    });

    c.bench_function("measure_convert_to", |bench| {
        bench.iter(|| black_box(a).convert_to(AbsorbedDose::centi_gray()))
    });
}

fn bench_collections(c: &mut Criterion) {
    let amounts: Vec<f32> = (0..1_000).map(|i| i as f32).collect();

    c.bench_function("into_quantities_in_1000", |bench| {
        bench.iter(|| {
            black_box(&amounts)
                .iter()
                .copied()
                .into_quantities_in(AbsorbedDose::milli_gray())
                .fold(AbsorbedDose::ZERO, |acc, d: AbsorbedDose| acc + d)
        })
    });

    let doses: Vec<AbsorbedDose> = amounts.iter().copied().into_quantities().collect();
    c.bench_function("amounts_in_1000", |bench| {
        bench.iter(|| {
            black_box(&doses)
                .iter()
                .amounts_in(AbsorbedDose::centi_gray())
                .sum::<f32>()
        })
    });
}

fn bench_catalog(c: &mut Criterion) {
    c.bench_function("catalog_convert", |bench| {
        bench.iter(|| measure_core::convert(black_box(250.0), black_box("cGy"), black_box("Gy")))
    });
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets =
        bench_value_arithmetic,
        bench_measure_arithmetic,
        bench_collections,
        bench_catalog
}
criterion_main!(benches);
