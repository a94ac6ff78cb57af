//! Criterion benchmarks for the per-frame hot path.
//!
//! Benchmarks:
//! 1. Geometry computation for a range of axis densities
//! 2. Scene building (geometry + display list) while a handle is dragged
//! 3. A full drag gesture across the axis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hysteresis_core::layout::FontSizeMetrics;
use hysteresis_core::{
    ControlConfig, DragState, Geometry, HysteresisControl, Point, Range, Scene, TickLabels,
    Viewport,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn config_with_steps(steps: usize) -> ControlConfig {
    let mut config = ControlConfig {
        bounds: Range::new(0.0, steps as f64),
        step: 1.0,
        initial: Range::new(steps as f64 * 0.25, steps as f64 * 0.75),
        ..Default::default()
    };
    config.axis.x.tick_labels = TickLabels::Values;
    config.display.fill = true;
    config
}

// ── 1. Geometry ──────────────────────────────────────────────────────

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    for steps in [10usize, 100, 1_000] {
        let config = config_with_steps(steps);
        group.bench_with_input(BenchmarkId::from_parameter(steps), &config, |b, config| {
            b.iter(|| {
                Geometry::compute(
                    black_box(config),
                    Viewport::new(1200.0, 200.0),
                    &FontSizeMetrics,
                )
            })
        });
    }
    group.finish();
}

// ── 2. Scene ─────────────────────────────────────────────────────────

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    for steps in [10usize, 100, 1_000] {
        let config = config_with_steps(steps);
        let geometry = Geometry::compute(&config, Viewport::new(1200.0, 200.0), &FontSizeMetrics);
        group.bench_with_input(BenchmarkId::from_parameter(steps), &config, |b, config| {
            b.iter(|| {
                Scene::build(
                    black_box(config),
                    &geometry,
                    config.initial,
                    DragState::DraggingMax,
                    &FontSizeMetrics,
                )
            })
        });
    }
    group.finish();
}

// ── 3. Gesture ───────────────────────────────────────────────────────

fn bench_gesture(c: &mut Criterion) {
    let config = config_with_steps(100);
    let geometry = Geometry::compute(&config, Viewport::new(1200.0, 200.0), &FontSizeMetrics);

    c.bench_function("gesture/sweep_max", |b| {
        b.iter(|| {
            let mut control = HysteresisControl::new(config.value_bounds(), config.initial);
            control.begin(&geometry, geometry.knob_center(config.initial.max));
            let mut x = geometry.origin_x;
            while x <= geometry.axis_end_x() {
                control.update(&geometry, Point::new(x, geometry.control_y));
                x += 3.0;
            }
            black_box(control.end())
        })
    });
}

criterion_group!(benches, bench_geometry, bench_scene, bench_gesture);
criterion_main!(benches);
