//! Benchmarks for chord-hand classification.

use std::hint::black_box;

use criterion::Criterion;
use aerostrum::gesture::{classify, lookup, GestureKey};
use aerostrum::landmark::HandLandmarks;

pub fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/classify");

    let hands: Vec<HandLandmarks> = (0u8..32)
        .map(|bits| HandLandmarks::posed(GestureKey::from_bits(bits)))
        .collect();

    // Landmarks -> key -> table, over every possible posture
    group.bench_function("all_postures", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(classify(black_box(hand)));
            }
        })
    });

    // Table lookup alone
    group.bench_function("lookup", |b| {
        b.iter(|| {
            for bits in 0u8..32 {
                black_box(lookup(black_box(GestureKey::from_bits(bits))));
            }
        })
    });

    group.finish();
}
