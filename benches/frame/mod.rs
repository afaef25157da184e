//! Benchmarks for work done once per video frame.

mod classify;
mod session;
mod strum;

pub use classify::bench_classify;
pub use session::bench_session;
pub use strum::bench_strum;
