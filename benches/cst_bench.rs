use airfoil_cst_editor::core::cst::generate_curve;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_curve_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_generation");

    for &weight_count in &[4usize, 8, 16] {
        let weights: Vec<f64> = (0..weight_count)
            .map(|i| 0.2 - 0.03 * (i as f64))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("samples_100", weight_count),
            &weights,
            |b, w| b.iter(|| black_box(generate_curve(black_box(w), 100))),
        );
    }

    group.finish();
}

criterion_group!(cst_benches, bench_curve_generation);
criterion_main!(cst_benches);
