//! Criterion benchmarks for the analysis hot paths
//!
//! Covers: full `analyze` calls, micro-tremor scanning, hesitation detection
//! and spatial organization over growing stroke sets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use handwriting_screener::analysis::kinematics::analyze_hesitations;
use handwriting_screener::analysis::motor::micro_tremor_count;
use handwriting_screener::analysis::spatial::spatial_organization;
use handwriting_screener::capture::types::{CanvasSize, PromptType, Stroke, StrokePoint};
use handwriting_screener::workflow::analyze;

/// Wavy strokes laid out on rows, one stroke per "letter"
fn make_strokes(stroke_count: usize, points_per_stroke: usize) -> Vec<Stroke> {
    let mut t = 0i64;
    (0..stroke_count)
        .map(|s| {
            let x0 = 20.0 + (s % 10) as f64 * 25.0;
            let y0 = 40.0 + (s / 10 % 8) as f64 * 30.0;
            let points = (0..points_per_stroke)
                .map(|i| {
                    let x = x0 + i as f64 * 0.8;
                    let y = y0 + (i as f64 * 0.4).sin() * 6.0;
                    t += 12;
                    StrokePoint::new(x, y, t)
                })
                .collect();
            t += 250;
            Stroke::new(points, 3.0)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Full analysis
// ---------------------------------------------------------------------------

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for count in [1, 10, 50, 200] {
        let strokes = make_strokes(count, 30);
        let total_time = strokes
            .last()
            .and_then(|s| s.last())
            .map(|p| p.time)
            .unwrap_or(0);

        group.bench_with_input(BenchmarkId::new("strokes", count), &strokes, |b, strokes| {
            b.iter(|| {
                analyze(
                    black_box(strokes),
                    total_time,
                    300.0,
                    300.0,
                    PromptType::Sentence,
                    "Bench",
                    3,
                )
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Individual analyzers
// ---------------------------------------------------------------------------

fn bench_micro_tremor(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_tremor_count");

    for points in [10, 100, 1000] {
        let strokes = make_strokes(5, points);
        group.bench_with_input(BenchmarkId::new("points", points), &strokes, |b, strokes| {
            b.iter(|| micro_tremor_count(black_box(strokes)));
        });
    }

    group.finish();
}

fn bench_hesitations(c: &mut Criterion) {
    let strokes = make_strokes(200, 20);
    c.bench_function("analyze_hesitations_200", |b| {
        b.iter(|| analyze_hesitations(black_box(&strokes)));
    });
}

fn bench_spatial(c: &mut Criterion) {
    let strokes = make_strokes(200, 20);
    let canvas = CanvasSize::new(300.0, 300.0);
    c.bench_function("spatial_organization_200", |b| {
        b.iter(|| spatial_organization(black_box(&strokes), &canvas));
    });
}

criterion_group!(
    benches,
    bench_analyze,
    bench_micro_tremor,
    bench_hesitations,
    bench_spatial
);
criterion_main!(benches);
