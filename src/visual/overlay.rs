use super::{Rgb, StringVisualState};
use crate::landmark::Point;
use crate::strum::{Rect, StringLayout};
use crate::NUM_STRINGS;

/// One string as it should be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringView {
    pub label: &'static str,
    pub color: Rgb,
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
    /// Line width in pixels; the low E is the thickest.
    pub thickness: u8,
}

/// Everything a renderer needs to draw one frame's overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub strings: [StringView; NUM_STRINGS],
    /// String region bounding rectangle.
    pub region: Rect,
    /// `"2 (acoustic)"` while a chord hand is visible.
    pub gesture_label: Option<String>,
    pub gesture_color: Rgb,
    /// Roman numeral of the recognized chord, e.g. `"II"`.
    pub numeral: Option<&'static str>,
    /// Chord hand bounding box in hand-view pixels.
    pub hand_box: Option<Rect>,
    pub strum_point: Option<Point>,
    /// `"Dm (acoustic)"`, or `"None (N/A)"` before any chord.
    pub strum_label: String,
    pub marker_color: Rgb,
}

impl StringView {
    pub fn build_all(layout: &StringLayout, visuals: &StringVisualState) -> [StringView; NUM_STRINGS] {
        std::array::from_fn(|s| {
            let state = &visuals.strings()[s];
            StringView {
                label: state.label,
                color: state.color,
                y: layout.line_y(s),
                x_start: layout.start_x(),
                x_end: layout.end_x(),
                thickness: (NUM_STRINGS - s) as u8,
            }
        })
    }
}
