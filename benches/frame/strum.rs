//! Benchmarks for strum crossing detection.

use std::hint::black_box;

use criterion::Criterion;
use aerostrum::landmark::Point;
use aerostrum::strum::{StringLayout, StrumTracker};

pub fn bench_strum(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/strum");
    let layout = StringLayout::default();

    // Full sweeps across all six strings, alternating direction
    let mut tracker = StrumTracker::new(layout);
    let mut down = true;
    group.bench_function("sweep", |b| {
        b.iter(|| {
            let y = if down { 600 } else { 450 };
            down = !down;
            black_box(tracker.update(black_box(Some(Point::new(1000, y))), true));
        })
    });

    // Hovering inside the band without crossing anything
    let mut tracker = StrumTracker::new(layout);
    group.bench_function("idle", |b| {
        b.iter(|| {
            black_box(tracker.update(black_box(Some(Point::new(1000, 500))), true));
        })
    });

    group.finish();
}
