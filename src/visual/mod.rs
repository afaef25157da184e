//! Per-string highlight state and the overlay handed to renderers.

mod overlay;

pub use overlay::{Overlay, StringView};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::gesture::Mode;
use crate::NUM_STRINGS;

/// Open-string note names, low to high.
pub const STRING_LABELS: [&str; NUM_STRINGS] = ["E", "A", "D", "G", "B", "E"];

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Resting string color.
    pub const NEUTRAL: Rgb = Rgb::new(200, 200, 200);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// Color of a freshly struck string.
pub fn highlight_color(mode: Mode) -> Rgb {
    match mode {
        Mode::Acoustic => Rgb::ORANGE,
        Mode::Distorted => Rgb::RED,
    }
}

/// Color of the strum-point marker and its label.
pub fn marker_color(mode: Option<Mode>) -> Rgb {
    match mode {
        Some(Mode::Distorted) => Rgb::YELLOW,
        _ => Rgb::GREEN,
    }
}

/// Color of the chord-hand gesture label.
pub fn gesture_color(mode: Mode) -> Rgb {
    match mode {
        Mode::Acoustic => Rgb::GREEN,
        Mode::Distorted => Rgb::RED,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringState {
    pub label: &'static str,
    pub color: Rgb,
    /// Frame of the most recent trigger.
    pub last_trigger: Option<u64>,
}

/// Highlight state of all six strings.
///
/// A triggered string takes its mode's highlight color and holds it until
/// more than `hold_frames` frames have passed.
#[derive(Clone, Debug)]
pub struct StringVisualState {
    strings: [StringState; NUM_STRINGS],
    hold_frames: u64,
}

impl StringVisualState {
    pub fn new(hold_frames: u64) -> Self {
        Self {
            strings: std::array::from_fn(|s| StringState {
                label: STRING_LABELS[s],
                color: Rgb::NEUTRAL,
                last_trigger: None,
            }),
            hold_frames,
        }
    }

    pub fn on_trigger(&mut self, string: usize, frame: u64, mode: Mode) {
        if let Some(state) = self.strings.get_mut(string) {
            state.color = highlight_color(mode);
            state.last_trigger = Some(frame);
        }
    }

    /// Revert strings whose highlight has expired as of `frame`.
    pub fn tick(&mut self, frame: u64) {
        for state in &mut self.strings {
            if let Some(last) = state.last_trigger {
                if frame.saturating_sub(last) > self.hold_frames {
                    state.color = Rgb::NEUTRAL;
                }
            }
        }
    }

    pub fn get(&self, string: usize) -> Option<&StringState> {
        self.strings.get(string)
    }

    pub fn strings(&self) -> &[StringState; NUM_STRINGS] {
        &self.strings
    }

    pub fn is_highlighted(&self, string: usize) -> bool {
        self.get(string).is_some_and(|s| s.color != Rgb::NEUTRAL)
    }
}

impl Default for StringVisualState {
    fn default() -> Self {
        Self::new(10)
    }
}
