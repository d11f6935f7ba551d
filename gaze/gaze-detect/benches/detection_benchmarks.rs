//! Benchmarks for gaze event detection.
//!
//! Run with: cargo bench -p gaze-detect
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p gaze-detect -- --save-baseline main
//! 2. After changes: cargo bench -p gaze-detect -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gaze_detect::{
    compute_threshold, fill, idt, ivt, microsaccades, ThresholdMethod, VelocityThreshold,
};
use gaze_types::{Event, EventKind, EventList, Point2, Timestep, Vector2};

// =============================================================================
// Test Signal Generation
// =============================================================================

/// Alternating fixations and saccades: `period` samples per fixation, 5-sample
/// saccades between them.
fn recording(samples: usize, period: usize) -> (Vec<Point2<f64>>, Vec<Vector2<f64>>) {
    let mut positions = Vec::with_capacity(samples);
    let mut velocities = Vec::with_capacity(samples);

    for i in 0..samples {
        let block = i / period;
        let within = i % period;
        #[allow(clippy::cast_precision_loss)]
        let target = Point2::new(10.0 * block as f64, 5.0 * block as f64);

        if within < 5 && block > 0 {
            // Saccade samples: fast, far from the previous target.
            positions.push(Point2::new(target.x - 5.0, target.y - 2.5));
            velocities.push(Vector2::new(120.0, 60.0));
        } else {
            // Fixation samples: tiny oscillation around the target.
            let jitter = if i % 2 == 0 { 0.01 } else { -0.01 };
            positions.push(Point2::new(target.x + jitter, target.y - jitter));
            velocities.push(Vector2::new(jitter, -jitter));
        }
    }

    (positions, velocities)
}

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

// =============================================================================
// Detection Benchmarks
// =============================================================================

fn bench_idt(c: &mut Criterion) {
    let mut group = c.benchmark_group("idt");

    for size in SIZES {
        let (positions, _) = recording(size, 100);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &positions,
            |b, positions| b.iter(|| idt(black_box(positions), black_box(1.0), black_box(10))),
        );
    }

    group.finish();
}

fn bench_ivt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ivt");

    for size in SIZES {
        let (positions, velocities) = recording(size, 100);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(positions, velocities),
            |b, (positions, velocities)| {
                b.iter(|| ivt(black_box(positions), black_box(velocities), black_box(30.0)));
            },
        );
    }

    group.finish();
}

fn bench_microsaccades(c: &mut Criterion) {
    let mut group = c.benchmark_group("microsaccades");

    for size in SIZES {
        let (_, velocities) = recording(size, 100);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("fixed", size),
            &velocities,
            |b, velocities| {
                let threshold = VelocityThreshold::fixed(10.0, 10.0);
                b.iter(|| microsaccades(black_box(velocities), black_box(&threshold)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("adaptive_engbert2015", size),
            &velocities,
            |b, velocities| {
                let threshold =
                    VelocityThreshold::adaptive_scaled(ThresholdMethod::Engbert2015, 6.0);
                b.iter(|| microsaccades(black_box(velocities), black_box(&threshold)));
            },
        );
    }

    group.finish();
}

fn bench_threshold_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_threshold");

    let (_, velocities) = recording(10_000, 100);
    group.throughput(Throughput::Elements(velocities.len() as u64));

    for method in ThresholdMethod::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(method.as_str()),
            &velocities,
            |b, velocities| b.iter(|| compute_threshold(black_box(velocities), black_box(method))),
        );
    }

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for size in SIZES {
        let timesteps: Vec<Timestep> = (0..size as Timestep).collect();

        // Every other 50-timestep block is covered.
        let mut events = EventList::new();
        let mut onset: Timestep = 0;
        while onset + 50 <= size as Timestep {
            if let Ok(event) = Event::new(EventKind::Fixation, onset, onset + 50) {
                events.push(event);
            }
            onset += 100;
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(events, timesteps),
            |b, (events, timesteps)| {
                b.iter(|| {
                    fill(
                        black_box(events),
                        black_box(timesteps),
                        black_box(1),
                        black_box(EventKind::Unclassified),
                    )
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(
    benches,
    bench_idt,
    bench_ivt,
    bench_microsaccades,
    bench_threshold_estimation,
    bench_fill
);
criterion_main!(benches);
