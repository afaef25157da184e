//! Per-frame orchestration.
//!
//! `SessionController` owns everything that changes from frame to frame:
//! the active chord and its sounds, the strum tracker, the string
//! highlights and the frame counter. Each call to
//! [`SessionController::process_frame`] runs one video frame end to end:
//!
//! 1. classify the chord hand and, on a new (chord, mode), swap sounds
//! 2. turn the strumming landmark into a pixel point
//! 3. detect crossed strings, retrigger their channels, light them up
//! 4. age the highlights and advance the frame counter

use tracing::debug;

use crate::audio::{NullOutput, StringOutput};
use crate::chord::{Chord, ChordAssetSet, ChordLibrary, SoundLoader, WavLoader};
use crate::config::SessionConfig;
use crate::gesture::{classify, Gesture, Mode};
use crate::landmark::{FrameInput, HandLandmarks, Point};
use crate::strum::{Rect, StringLayout, StringSet, StrumTracker};
use crate::visual::{gesture_color, marker_color, Overlay, Rgb, StringView, StringVisualState};

/// Padding around the chord hand's bounding box, in pixels.
const HAND_BOX_PAD: i32 = 20;

/// One string fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerEvent {
    pub string: usize,
    pub chord: Chord,
    pub mode: Mode,
    pub frame: u64,
}

/// What happened during one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    /// Classification of the chord hand, if one was visible.
    pub gesture: Option<Gesture>,
    /// The active chord or mode was replaced this frame.
    pub chord_changed: bool,
    pub strum_point: Option<Point>,
    pub crossed: StringSet,
    /// Strings that had a sound and were played.
    pub triggers: Vec<TriggerEvent>,
}

pub struct SessionController<L: SoundLoader = WavLoader, O: StringOutput = NullOutput> {
    config: SessionConfig,
    library: ChordLibrary<L>,
    output: O,
    tracker: StrumTracker,
    visuals: StringVisualState,
    /// Sounds of the active chord; carries the chord and mode with it so
    /// the two can only change together.
    active: Option<ChordAssetSet>,
    gesture: Option<Gesture>,
    hand_box: Option<Rect>,
    strum_point: Option<Point>,
    frame: u64,
}

impl<O: StringOutput> SessionController<WavLoader, O> {
    /// Session reading WAV assets from `config.asset_root`.
    pub fn new(config: SessionConfig, output: O) -> Self {
        let library = ChordLibrary::new(config.asset_root.clone());
        Self::with_library(config, library, output)
    }
}

impl<L: SoundLoader, O: StringOutput> SessionController<L, O> {
    pub fn with_library(config: SessionConfig, library: ChordLibrary<L>, output: O) -> Self {
        let tracker = StrumTracker::new(StringLayout::from_config(&config));
        let visuals = StringVisualState::new(config.highlight_frames);
        Self {
            config,
            library,
            output,
            tracker,
            visuals,
            active: None,
            gesture: None,
            hand_box: None,
            strum_point: None,
            frame: 0,
        }
    }

    /// Run one frame.
    pub fn process_frame(&mut self, input: &FrameInput) -> FrameReport {
        let frame = self.frame;

        // Chord hand
        let gesture = input.hand.as_ref().map(classify);
        let mut chord_changed = false;
        if let Some(Gesture::Chord { degree, mode }) = gesture {
            let chord = Chord::from_degree(degree);
            if self.active_chord() != Some((chord, mode)) {
                self.swap_chord(chord, mode);
                chord_changed = true;
            }
        }
        self.gesture = gesture;
        self.hand_box = input.hand.as_ref().map(|hand| self.hand_box(hand));

        // Strumming hand
        let point = input
            .pose
            .as_ref()
            .and_then(|pose| pose.get(self.config.strum_landmark))
            .map(|lm| lm.to_pixel(self.config.frame_width, self.config.frame_height));
        self.strum_point = point;

        // Crossings
        let crossed = self.tracker.update(point, self.active.is_some());
        let mut triggers = Vec::with_capacity(crossed.len());
        if let Some(active) = &self.active {
            for string in crossed.iter() {
                if let Some(sound) = active.get(string) {
                    self.output.stop(string);
                    self.output.play(string, sound);
                    triggers.push(TriggerEvent {
                        string,
                        chord: active.chord(),
                        mode: active.mode(),
                        frame,
                    });
                }
                self.visuals.on_trigger(string, frame, active.mode());
            }
        }
        if !crossed.is_empty() {
            debug!(
                "frame {}: crossed {:?}, {} triggered",
                frame,
                crossed.iter().collect::<Vec<_>>(),
                triggers.len()
            );
        }

        self.visuals.tick(frame);
        self.frame += 1;

        FrameReport {
            frame,
            gesture,
            chord_changed,
            strum_point: point,
            crossed,
            triggers,
        }
    }

    /// Replace the active sounds wholesale.
    fn swap_chord(&mut self, chord: Chord, mode: Mode) {
        debug!(
            "chord change {:?} -> {} ({})",
            self.active_chord(),
            chord,
            mode.as_str()
        );
        self.active = Some(self.library.load(chord, mode));
    }

    fn hand_box(&self, hand: &HandLandmarks) -> Rect {
        let view_w = self.config.frame_width as f64 * self.config.hand_view_width;
        let view_h = self.config.frame_height as f64;
        let (min_x, min_y, max_x, max_y) = hand.bounds();
        Rect {
            left: (min_x as f64 * view_w) as i32 - HAND_BOX_PAD,
            top: (min_y as f64 * view_h) as i32 - HAND_BOX_PAD,
            right: (max_x as f64 * view_w) as i32 + HAND_BOX_PAD,
            bottom: (max_y as f64 * view_h) as i32 + HAND_BOX_PAD,
        }
    }

    /// Snapshot for drawing the current frame.
    pub fn overlay(&self) -> Overlay {
        let layout = self.tracker.layout();
        let active = self.active_chord();

        Overlay {
            strings: StringView::build_all(layout, &self.visuals),
            region: layout.bounds(),
            gesture_label: self.gesture.map(Gesture::label),
            gesture_color: self
                .gesture
                .and_then(Gesture::mode)
                .map(gesture_color)
                .unwrap_or(Rgb::WHITE),
            numeral: self
                .gesture
                .and_then(Gesture::degree)
                .map(|d| Chord::from_degree(d).roman()),
            hand_box: self.hand_box,
            strum_point: self.strum_point,
            strum_label: match active {
                Some((chord, mode)) => format!("{} ({})", chord, mode.as_str()),
                None => "None (N/A)".to_string(),
            },
            marker_color: marker_color(active.map(|(_, mode)| mode)),
        }
    }

    pub fn active_chord(&self) -> Option<(Chord, Mode)> {
        self.active.as_ref().map(|set| (set.chord(), set.mode()))
    }

    pub fn assets(&self) -> Option<&ChordAssetSet> {
        self.active.as_ref()
    }

    /// Index of the next frame to be processed.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn visuals(&self) -> &StringVisualState {
        &self.visuals
    }

    pub fn tracker(&self) -> &StrumTracker {
        &self.tracker
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
