//! Synthetic hands for simulation and tests.

use super::{hand, HandLandmarks, Landmark, HAND_LANDMARK_COUNT};
use crate::gesture::GestureKey;

const PIP_Y: f32 = 0.60;
const EXTENDED_TIP_Y: f32 = 0.40;
const CURLED_TIP_Y: f32 = 0.68;

impl HandLandmarks {
    /// A plausible selfie-view hand whose posture produces `key`.
    pub fn posed(key: GestureKey) -> Self {
        let mut points = [Landmark::new(0.5, 0.85); HAND_LANDMARK_COUNT];

        points[hand::WRIST] = Landmark::new(0.50, 0.90);
        points[hand::THUMB_CMC] = Landmark::new(0.47, 0.82);
        points[hand::THUMB_MCP] = Landmark::new(0.44, 0.76);
        if key.thumb_open() {
            points[hand::THUMB_IP] = Landmark::new(0.40, 0.72);
            points[hand::THUMB_TIP] = Landmark::new(0.36, 0.69);
        } else {
            // Tucked across the palm: tip lies inward of the IP joint.
            points[hand::THUMB_IP] = Landmark::new(0.43, 0.72);
            points[hand::THUMB_TIP] = Landmark::new(0.47, 0.70);
        }

        let finger_bases = [
            (hand::INDEX_MCP, 0.46),
            (hand::MIDDLE_MCP, 0.50),
            (hand::RING_MCP, 0.54),
            (hand::PINKY_MCP, 0.58),
        ];
        for (finger, &(mcp, x)) in finger_bases.iter().enumerate() {
            let tip_y = if key.finger_extended(finger) {
                EXTENDED_TIP_Y
            } else {
                CURLED_TIP_Y
            };
            points[mcp] = Landmark::new(x, 0.72);
            points[mcp + 1] = Landmark::new(x, PIP_Y);
            points[mcp + 2] = Landmark::new(x, (PIP_Y + tip_y) / 2.0);
            points[mcp + 3] = Landmark::new(x, tip_y);
        }

        Self { points }
    }
}
