//! Benchmarks for the statistics primitives and box-and-whisker summaries.
//!
//! Sizes span a single chart category (tens of samples) up to a dense
//! series (tens of thousands).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use statchart_core::{
    calculate_box_and_whisker_statistics, calculate_mean, calculate_median, correlation,
    moving_average, polynomial_regression, Histogram, MissingPolicy,
};

const SIZES: [usize; 4] = [16, 256, 4096, 32768];

fn samples(size: usize) -> Vec<f64> {
    // Deterministic, unsorted, with a heavy tail so outliers exist.
    (0..size)
        .map(|i| {
            let x = (i as f64 * 0.618_033_988_749_895).fract();
            if i % 97 == 0 {
                x * 50.0
            } else {
                x
            }
        })
        .collect()
}

// =============================================================================
// Descriptive statistics
// =============================================================================

fn bench_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_mean");

    for size in SIZES {
        let data: Vec<Option<f64>> = samples(size)
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i % 10 != 0).then_some(v))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| calculate_mean(black_box(data), MissingPolicy::Skip));
        });
    }

    group.finish();
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_median");

    for size in SIZES {
        let data = samples(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| calculate_median(black_box(data), true));
        });
    }

    group.finish();
}

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    for size in SIZES {
        let xs = samples(size);
        let ys: Vec<f64> = xs.iter().map(|x| x * 2.0 + 1.0).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(xs, ys),
            |b, (xs, ys)| {
                b.iter(|| correlation(black_box(xs), black_box(ys)));
            },
        );
    }

    group.finish();
}

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");

    for size in SIZES {
        let ys = samples(size);
        let xs: Vec<f64> = (0..size).map(|i| i as f64).collect();
        let period = (size / 8).max(1);

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(xs, ys),
            |b, (xs, ys)| {
                b.iter(|| moving_average(black_box(xs), black_box(ys), period));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Summaries and fits
// =============================================================================

fn bench_box_and_whisker(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_and_whisker");

    for size in SIZES {
        let data = samples(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| calculate_box_and_whisker_statistics(black_box(data)));
        });
    }

    group.finish();
}

fn bench_polynomial_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_regression");

    for order in [1usize, 3, 6] {
        let data: Vec<(f64, f64)> = samples(1024)
            .into_iter()
            .enumerate()
            .map(|(i, noise)| {
                let x = i as f64 / 1024.0;
                (x, x * x - x + noise * 0.01)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(order), &data, |b, data| {
            b.iter(|| polynomial_regression(black_box(data), order));
        });
    }

    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for size in SIZES {
        let data = samples(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Histogram::new(black_box(data), 32));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mean,
    bench_median,
    bench_correlation,
    bench_moving_average,
    bench_box_and_whisker,
    bench_polynomial_regression,
    bench_histogram,
);
criterion_main!(benches);
