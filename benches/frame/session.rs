//! Benchmarks for whole frames through the session controller.
//!
//! Sounds come from an in-memory loader so no disk I/O is measured; the
//! chord stays fixed so the library is hit only on the first frame.

use std::hint::black_box;
use std::path::Path;

use criterion::Criterion;
use aerostrum::audio::NullOutput;
use aerostrum::chord::{ChordLibrary, Sound};
use aerostrum::error::Result;
use aerostrum::gesture::GestureKey;
use aerostrum::landmark::{FrameInput, HandLandmarks, Landmark, PoseLandmarks};
use aerostrum::{SessionConfig, SessionController};

fn memory_loader(_: &Path, gain: f32) -> Result<Sound> {
    Ok(Sound::new(vec![0.0; 4_800], 48_000, gain))
}

pub fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/session");

    // The library checks that the chord directory exists before loading.
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("acoustic").join("Dm");
    std::fs::create_dir_all(&dir).unwrap();
    for n in 1..=6 {
        std::fs::write(dir.join(format!("string{}.wav", n)), b"").unwrap();
    }

    let library = ChordLibrary::with_loader(tmp.path(), memory_loader);
    let mut session = SessionController::with_library(SessionConfig::default(), library, NullOutput);

    let hand = HandLandmarks::posed(GestureKey::from_tuple([false, true, true, false, false]));
    let above = FrameInput::new(
        Some(hand.clone()),
        Some(PoseLandmarks::with_point(33, 19, Landmark::new(0.52, 0.44))),
    );
    let below = FrameInput::new(
        Some(hand),
        Some(PoseLandmarks::with_point(33, 19, Landmark::new(0.52, 0.56))),
    );

    let mut flip = false;
    group.bench_function("strumming", |b| {
        b.iter(|| {
            flip = !flip;
            let input = if flip { &above } else { &below };
            black_box(session.process_frame(black_box(input)));
        })
    });

    let empty = FrameInput::empty();
    group.bench_function("empty_frame", |b| {
        b.iter(|| black_box(session.process_frame(black_box(&empty))))
    });

    group.finish();
}
