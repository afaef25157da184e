pub mod audio; // Per-string output channels and one-shot sample playback
pub mod chord; // Chord names and on-disk sound assets
pub mod config;
pub mod error;
pub mod gesture; // Hand posture -> (chord, mode)
pub mod landmark;
pub mod session; // Per-frame orchestration
pub mod strum; // String geometry and crossing detection
pub mod visual;

pub use config::SessionConfig;
pub use session::{FrameReport, SessionController, TriggerEvent};

/// Number of virtual strings.
pub const NUM_STRINGS: usize = 6;
pub const MAX_BLOCK_SIZE: usize = 2048;
