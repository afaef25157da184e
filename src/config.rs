//! Session configuration.
//!
//! Defaults reproduce a 1920x1080 selfie camera with the strumming hand
//! tracked by body landmark 19.

use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Root of the `<mode>/<chord>/string<n>.wav` tree.
    pub asset_root: PathBuf,
    /// Frame size in pixels.
    pub frame_width: u32,
    pub frame_height: u32,
    /// Left edge of the string region, as a fraction of frame width.
    pub region_start: f64,
    /// Right edge of the string region, as a fraction of frame width.
    pub region_end: f64,
    /// Vertical pixels between adjacent strings.
    pub string_spacing: i32,
    /// Frames a string stays highlighted after a trigger.
    pub highlight_frames: u64,
    /// Body landmark index of the strumming hand.
    pub strum_landmark: usize,
    /// Width of the chord-hand view as a fraction of frame width.
    pub hand_view_width: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("chords"),
            frame_width: 1920,
            frame_height: 1080,
            region_start: 0.45,
            region_end: 0.70,
            string_spacing: 15,
            highlight_frames: 10,
            strum_landmark: 19,
            hand_view_width: 0.5,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    /// Horizontal band, as fractions of frame width.
    pub fn region(mut self, start: f64, end: f64) -> Self {
        self.region_start = start;
        self.region_end = end;
        self
    }

    pub fn string_spacing(mut self, spacing: i32) -> Self {
        self.string_spacing = spacing;
        self
    }

    pub fn highlight_frames(mut self, frames: u64) -> Self {
        self.highlight_frames = frames;
        self
    }

    pub fn strum_landmark(mut self, index: usize) -> Self {
        self.strum_landmark = index;
        self
    }
}
