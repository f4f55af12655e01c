use chart_layout::api::ChartRenderer;
use chart_layout::core::{Axis, ChartSet, Padding, Point, Viewport};
use chart_layout::render::{FramePainter, RecordingPainter};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wave_set(len: usize, phase: f64) -> ChartSet {
    (0..len)
        .map(|i| {
            let t = i as f64;
            Point::new(format!("t{i}"), 100.0 + (t * 0.05 + phase).sin() * 25.0)
        })
        .collect()
}

fn bench_pre_draw_10k(c: &mut Criterion) {
    let mut renderer = ChartRenderer::with_painter(RecordingPainter::with_label_metrics(24.0, 12.0));
    renderer.add(wave_set(10_000, 0.0));
    renderer.add(wave_set(10_000, 1.5));

    c.bench_function("pre_draw_two_series_10k", |b| {
        b.iter(|| {
            renderer
                .pre_draw(
                    black_box(Viewport::new(1920, 1080)),
                    black_box(Padding::uniform(16.0)),
                    black_box(Axis::XY),
                    black_box(4.0),
                )
                .expect("layout should succeed");
        })
    });
}

fn bench_frame_draw_2k(c: &mut Criterion) {
    let viewport = Viewport::new(1600, 900);
    let mut renderer = ChartRenderer::with_painter(FramePainter::heuristic(viewport));
    renderer.add(wave_set(2_000, 0.0));
    renderer
        .pre_draw(viewport, Padding::uniform(16.0), Axis::XY, 0.0)
        .expect("layout should succeed");

    c.bench_function("frame_draw_2k", |b| {
        b.iter(|| {
            renderer.draw().expect("draw should succeed");
            black_box(renderer.painter_mut().take_frame());
        })
    });
}

criterion_group!(benches, bench_pre_draw_10k, bench_frame_draw_2k);
criterion_main!(benches);
