//! Benchmarks for the audio callback side.

mod player;

pub use player::bench_player;
