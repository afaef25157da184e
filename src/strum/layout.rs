use super::StringSet;
use crate::{SessionConfig, NUM_STRINGS};

/// Padding around the string region when drawn.
const REGION_PAD_X: i32 = 10;
const REGION_PAD_Y: i32 = 20;

/// Axis-aligned pixel rectangle, edges inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Pixel geometry of the string region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringLayout {
    start_x: i32,
    end_x: i32,
    start_y: i32,
    spacing: i32,
}

impl StringLayout {
    /// Place strings directly: line `i` sits at `start_y + i * spacing`, and
    /// the band spans `start_x..=end_x`.
    pub fn new(start_x: i32, end_x: i32, start_y: i32, spacing: i32) -> Self {
        Self {
            start_x,
            end_x,
            start_y,
            spacing,
        }
    }

    /// Derive the layout from the frame size: strings centered vertically,
    /// band between the configured width fractions.
    pub fn for_frame(width: u32, height: u32, region: (f64, f64), spacing: i32) -> Self {
        let start_x = (width as f64 * region.0) as i32;
        let end_x = (width as f64 * region.1) as i32;
        let mid_y = (height / 2) as i32;
        let start_y = mid_y - (NUM_STRINGS as i32 / 2) * spacing;
        Self::new(start_x, end_x, start_y, spacing)
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::for_frame(
            config.frame_width,
            config.frame_height,
            (config.region_start, config.region_end),
            config.string_spacing,
        )
    }

    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    pub fn end_x(&self) -> i32 {
        self.end_x
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn line_y(&self, string: usize) -> i32 {
        self.start_y + string as i32 * self.spacing
    }

    pub fn lines(&self) -> [i32; NUM_STRINGS] {
        std::array::from_fn(|s| self.line_y(s))
    }

    /// Whether `x` falls inside the band. Both edges count.
    pub fn contains_x(&self, x: i32) -> bool {
        self.start_x <= x && x <= self.end_x
    }

    /// Strings whose line lies between `prev_y` and `y`.
    ///
    /// Moving down, a line at exactly `y` counts and one at `prev_y` does
    /// not; moving up, the same. A point resting on a line therefore fires
    /// it once, on arrival.
    pub fn crossed(&self, prev_y: i32, y: i32) -> StringSet {
        (0..NUM_STRINGS)
            .filter(|&s| {
                let line = self.line_y(s);
                (prev_y < line && line <= y) || (prev_y > line && line >= y)
            })
            .collect()
    }

    /// The region as drawn, padded around the band and the string lines.
    pub fn bounds(&self) -> Rect {
        Rect {
            left: self.start_x - REGION_PAD_X,
            top: self.start_y - REGION_PAD_Y,
            right: self.end_x + REGION_PAD_X,
            bottom: self.start_y + NUM_STRINGS as i32 * self.spacing + REGION_PAD_Y,
        }
    }
}

impl Default for StringLayout {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
