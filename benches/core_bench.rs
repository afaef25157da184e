//! Benchmarks for the per-frame path and the audio callback.
//!
//! Run with: cargo bench
//!
//! A camera runs at 30-60 fps, so one frame of gesture + strum work has a
//! 16-33ms budget; in practice it should cost microseconds. The audio side
//! is held to the usual real-time deadlines:
//!   - 128 samples = 2.67ms at 48kHz
//!   - 512 samples = 10.67ms at 48kHz
//!
//! Benchmark groups:
//!   - frame/*   Classification, crossing detection, full session frames
//!   - audio/*   String player rendering

use criterion::{criterion_group, criterion_main};

mod audio;
mod frame;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    frame::bench_classify,
    frame::bench_strum,
    frame::bench_session,
    audio::bench_player,
);
criterion_main!(benches);
