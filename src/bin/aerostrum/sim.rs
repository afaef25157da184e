//! Keyboard stand-in for the camera and landmark models.
//!
//! Holds a posed chord hand and a strumming point in normalized frame
//! coordinates, and turns them into one `FrameInput` per UI tick.

use crossterm::event::KeyCode;

use aerostrum::gesture::{Degree, GestureKey, Mode};
use aerostrum::landmark::{FrameInput, HandLandmarks, Landmark, PoseLandmarks};

/// Body landmarks per pose.
const POSE_LEN: usize = 33;
/// Arrow-key nudge, in frame fractions.
const NUDGE: f32 = 0.01;
/// Sweep speed per frame, in frame fractions.
const SWEEP_SPEED: f32 = 0.02;
/// Sweep endpoints, clear of the string region on both sides.
const SWEEP_TOP: f32 = 0.42;
const SWEEP_BOTTOM: f32 = 0.58;

pub struct Simulator {
    key: GestureKey,
    hand_visible: bool,
    pose_visible: bool,
    strum: Landmark,
    /// Target y of a sweep in progress.
    sweep_to: Option<f32>,
    strum_landmark: usize,
}

impl Simulator {
    pub fn new(strum_landmark: usize) -> Self {
        Self {
            key: GestureKey::for_chord(Degree::One, Mode::Acoustic),
            hand_visible: true,
            pose_visible: true,
            strum: Landmark::new(0.55, SWEEP_TOP),
            sweep_to: None,
            strum_landmark,
        }
    }

    /// Returns false for keys the simulator does not use.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c @ '1'..='7') => {
                if let Some(degree) = Degree::from_symbol(&c.to_string()) {
                    self.key = GestureKey::for_chord(degree, self.mode());
                }
            }
            KeyCode::Char('t') => {
                self.key = GestureKey::from_bits(self.key.bits() ^ 1);
            }
            KeyCode::Char('0') => {
                // Closed fist: no chord
                self.key = GestureKey::from_bits(self.key.bits() & 1);
            }
            KeyCode::Char('h') => self.hand_visible = !self.hand_visible,
            KeyCode::Char('p') => self.pose_visible = !self.pose_visible,
            KeyCode::Char(' ') => {
                let target = if self.strum.y < 0.5 { SWEEP_BOTTOM } else { SWEEP_TOP };
                self.sweep_to = Some(target);
            }
            KeyCode::Up => self.nudge(0.0, -NUDGE),
            KeyCode::Down => self.nudge(0.0, NUDGE),
            KeyCode::Left => self.nudge(-NUDGE, 0.0),
            KeyCode::Right => self.nudge(NUDGE, 0.0),
            _ => return false,
        }
        true
    }

    fn nudge(&mut self, dx: f32, dy: f32) {
        self.sweep_to = None;
        self.strum.x = (self.strum.x + dx).clamp(0.0, 1.0);
        self.strum.y = (self.strum.y + dy).clamp(0.0, 1.0);
    }

    /// Advance any sweep and emit this frame's landmarks.
    pub fn step(&mut self) -> FrameInput {
        if let Some(target) = self.sweep_to {
            let dy = target - self.strum.y;
            if dy.abs() <= SWEEP_SPEED {
                self.strum.y = target;
                self.sweep_to = None;
            } else {
                self.strum.y += SWEEP_SPEED.copysign(dy);
            }
        }

        let hand = self.hand_visible.then(|| HandLandmarks::posed(self.key));
        let pose = self
            .pose_visible
            .then(|| PoseLandmarks::with_point(POSE_LEN, self.strum_landmark, self.strum));
        FrameInput::new(hand, pose)
    }

    fn mode(&self) -> Mode {
        if self.key.thumb_open() {
            Mode::Distorted
        } else {
            Mode::Acoustic
        }
    }

    pub fn hand_visible(&self) -> bool {
        self.hand_visible
    }

    pub fn pose_visible(&self) -> bool {
        self.pose_visible
    }
}
