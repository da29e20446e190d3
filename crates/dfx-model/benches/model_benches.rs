//! Criterion benchmarks for dfx-model.
//!
//! Covers: slider mapping in both directions and a full revenue recomputation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dfx_core::traits::RevenueCalculator;
use dfx_core::types::Inputs;
use dfx_model::{LogScale, RevenueModel};

fn bench_scale(c: &mut Criterion) {
    let scale = LogScale::ACTIVE_USERS;

    c.bench_function("linear_to_value", |b| {
        b.iter(|| scale.linear_to_value(black_box(42.5)))
    });

    c.bench_function("value_to_linear", |b| {
        b.iter(|| scale.value_to_linear(black_box(50_000.0)))
    });
}

fn bench_compute_revenue(c: &mut Criterion) {
    let model = RevenueModel::new();
    let inputs = Inputs::new(50_000, 100.0, 20.0);

    c.bench_function("compute_revenue", |b| {
        b.iter(|| model.compute_revenue(black_box(&inputs)))
    });
}

criterion_group!(benches, bench_scale, bench_compute_revenue);
criterion_main!(benches);
