//! Benchmark tests for rating operations.

use asterism_core::{Constraints, Point, Rect, RecordingCanvas, Widget};
use asterism_widgets::{fill_fractions, Rating, SlotRenderer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_fill_fractions(c: &mut Criterion) {
    c.bench_function("fill_fractions_count_10", |b| {
        b.iter(|| fill_fractions(black_box(10), black_box(6.7)))
    });
}

fn bench_slot_render(c: &mut Criterion) {
    let renderer = SlotRenderer::default();

    c.bench_function("slot_render", |b| {
        b.iter(|| renderer.render(black_box(Point::ORIGIN), black_box(42.0)))
    });
}

fn bench_rating_measure(c: &mut Criterion) {
    let rating = Rating::new(3.4);
    let constraints = Constraints::new(0.0, 400.0, 0.0, 50.0);

    c.bench_function("rating_measure", |b| {
        b.iter(|| rating.measure(black_box(constraints)))
    });
}

fn bench_rating_paint(c: &mut Criterion) {
    let mut rating = Rating::new(3.4).count(10);
    rating.layout(Rect::new(0.0, 0.0, 276.0, 24.0));

    c.bench_function("rating_paint_count_10", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            rating.paint(&mut canvas);
            canvas.command_count()
        })
    });
}

criterion_group!(
    benches,
    bench_fill_fractions,
    bench_slot_render,
    bench_rating_measure,
    bench_rating_paint,
);
criterion_main!(benches);
