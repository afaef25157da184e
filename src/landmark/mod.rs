//! Landmark input from an upstream hand/pose detector.
//!
//! Coordinates are normalized to the frame: `x` and `y` in `[0, 1]`, with
//! smaller `y` meaning higher on screen. The hand skeleton follows the
//! MediaPipe 21-point layout; the body skeleton is addressed by index only.
//!
//! Nothing in here talks to a camera or a model. Callers fill a
//! [`FrameInput`] once per video frame and hand it to the session.

mod synthetic;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hand landmark indices.
pub mod hand {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;

    /// Fingertips of index, middle, ring and pinky, in that order.
    pub const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
    /// PIP joints matching [`FINGER_TIPS`].
    pub const FINGER_PIPS: [usize; 4] = [INDEX_PIP, MIDDLE_PIP, RING_PIP, PINKY_PIP];
}

/// Landmarks per hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// A single normalized landmark. `z` is carried but unused.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Scale to pixel space, truncating toward zero.
    pub fn to_pixel(&self, width: u32, height: u32) -> Point {
        Point {
            x: (self.x as f64 * width as f64) as i32,
            y: (self.y as f64 * height as f64) as i32,
        }
    }
}

/// Integer pixel position.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One hand's 21 landmarks, in selfie (mirrored) view.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    pub points: [Landmark; HAND_LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build from a detector's point list. Returns `None` unless exactly 21
    /// points are supplied.
    pub fn from_slice(points: &[Landmark]) -> Option<Self> {
        let points: [Landmark; HAND_LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Self { points })
    }

    pub fn get(&self, index: usize) -> &Landmark {
        &self.points[index]
    }

    /// Flip horizontally (`x -> 1 - x`), turning raw camera coordinates into
    /// the selfie view the classifier expects.
    pub fn mirrored(&self) -> Self {
        let mut points = self.points;
        for p in &mut points {
            p.x = 1.0 - p.x;
        }
        Self { points }
    }

    /// Normalized bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        self.points.iter().fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        )
    }
}

/// A body skeleton, addressed by the detector's landmark index.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoseLandmarks {
    pub points: Vec<Landmark>,
}

impl PoseLandmarks {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    /// A skeleton of `len` default points with `index` set to `landmark`.
    pub fn with_point(len: usize, index: usize, landmark: Landmark) -> Self {
        let mut points = vec![Landmark::default(); len.max(index + 1)];
        points[index] = landmark;
        Self { points }
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.points.get(index)
    }
}

/// Everything the detector produced for one video frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Chord hand, if one was detected.
    pub hand: Option<HandLandmarks>,
    /// Body skeleton carrying the strumming hand, if detected.
    pub pose: Option<PoseLandmarks>,
}

impl FrameInput {
    pub fn new(hand: Option<HandLandmarks>, pose: Option<PoseLandmarks>) -> Self {
        Self { hand, pose }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pixel_truncates() {
        let lm = Landmark::new(0.5004, 0.2501);
        assert_eq!(lm.to_pixel(1920, 1080), Point::new(960, 270));
    }

    #[test]
    fn from_slice_requires_21_points() {
        assert!(HandLandmarks::from_slice(&[Landmark::default(); 20]).is_none());
        assert!(HandLandmarks::from_slice(&[Landmark::default(); 21]).is_some());
    }

    #[test]
    fn mirrored_flips_x_only() {
        let mut points = [Landmark::default(); HAND_LANDMARK_COUNT];
        points[hand::THUMB_TIP] = Landmark::new(0.25, 0.4);
        let flipped = HandLandmarks::new(points).mirrored();
        assert!((flipped.get(hand::THUMB_TIP).x - 0.75).abs() < 1e-6);
        assert!((flipped.get(hand::THUMB_TIP).y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn pose_with_point_grows_to_fit_index() {
        let pose = PoseLandmarks::with_point(5, 19, Landmark::new(0.1, 0.2));
        assert_eq!(pose.points.len(), 20);
        assert_eq!(pose.get(19), Some(&Landmark::new(0.1, 0.2)));
        assert!(pose.get(20).is_none());
    }
}
