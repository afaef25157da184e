use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::landmark::{hand, HandLandmarks};

/*
Chord Hand Classification
=========================

One hand's posture picks both the chord and the timbre. The posture is
reduced to five booleans, packed into a 5-bit gesture key:

  bit 0   thumb open      tip.x < ip.x < mcp.x   (selfie view)
  bit 1   index extended  tip.y < pip.y          (smaller y = higher)
  bit 2   middle extended
  bit 3   ring extended
  bit 4   pinky extended

The four finger bits pick the chord degree, the thumb bit picks the mode:

  fingers (I M R P)   degree    thumb closed   thumb open
  -----------------   ------    ------------   ----------
   1 0 0 0              1        acoustic       distorted
   1 1 0 0              2           "              "
   1 1 1 0              3           "              "
   1 1 1 1              4           "              "
   0 0 0 1              5           "              "
   0 0 1 1              6           "              "
   0 1 1 1              7           "              "

So the acoustic and distorted tables are disjoint (they differ in bit 0)
and every other key is Unknown. 14 of the 32 keys are chords.

Classification is per frame. There is no smoothing or hold time, so a hand
sitting between two shapes can flicker between chords from frame to frame.
*/

/// Five-bit posture pattern: thumb-open plus four finger-extended flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GestureKey(u8);

impl GestureKey {
    const THUMB: u8 = 0b0_0001;

    /// `fingers` is index, middle, ring, pinky.
    pub const fn new(thumb_open: bool, fingers: [bool; 4]) -> Self {
        let mut bits = thumb_open as u8;
        let mut i = 0;
        while i < 4 {
            bits |= (fingers[i] as u8) << (i + 1);
            i += 1;
        }
        Self(bits)
    }

    /// From the `(thumb, index, middle, ring, pinky)` tuple order.
    pub const fn from_tuple(flags: [bool; 5]) -> Self {
        Self::new(flags[0], [flags[1], flags[2], flags[3], flags[4]])
    }

    /// Lower five bits are used, the rest are discarded.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1_1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn thumb_open(self) -> bool {
        self.0 & Self::THUMB != 0
    }

    /// `finger` 0..4 = index, middle, ring, pinky.
    pub const fn finger_extended(self, finger: usize) -> bool {
        self.0 & (1 << (finger + 1)) != 0
    }

    const fn finger_bits(self) -> u8 {
        self.0 >> 1
    }

    /// Read the posture off a hand's landmarks.
    pub fn from_hand(hand: &HandLandmarks) -> Self {
        let tip = hand.get(hand::THUMB_TIP).x;
        let ip = hand.get(hand::THUMB_IP).x;
        let mcp = hand.get(hand::THUMB_MCP).x;
        let thumb_open = tip < ip && ip < mcp;

        let mut fingers = [false; 4];
        for (extended, (&tip, &pip)) in fingers
            .iter_mut()
            .zip(hand::FINGER_TIPS.iter().zip(hand::FINGER_PIPS.iter()))
        {
            *extended = hand.get(tip).y < hand.get(pip).y;
        }

        Self::new(thumb_open, fingers)
    }

    /// The posture that shows `degree` in `mode`.
    pub fn for_chord(degree: Degree, mode: Mode) -> Self {
        let shape = CHORD_SHAPES
            .iter()
            .find(|(_, d)| *d == degree)
            .map_or(0, |&(shape, _)| shape);
        Self::from_bits(shape << 1 | (mode == Mode::Distorted) as u8)
    }
}

/// Chord symbol, "1" through "7".
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degree {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
}

impl Degree {
    pub const ALL: [Degree; 7] = [
        Degree::One,
        Degree::Two,
        Degree::Three,
        Degree::Four,
        Degree::Five,
        Degree::Six,
        Degree::Seven,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Degree::One => "1",
            Degree::Two => "2",
            Degree::Three => "3",
            Degree::Four => "4",
            Degree::Five => "5",
            Degree::Six => "6",
            Degree::Seven => "7",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.symbol() == symbol)
    }

    /// 1-based scale degree.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// Timbre family.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Acoustic,
    Distorted,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Acoustic, Mode::Distorted];

    /// Also the asset directory name.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Acoustic => "acoustic",
            Mode::Distorted => "distorted",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    /// Playback gain applied to every sound loaded in this mode.
    pub fn gain(self) -> f32 {
        match self {
            Mode::Acoustic => 0.7,
            Mode::Distorted => 0.8,
        }
    }
}

/// Result of classifying one hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    Chord { degree: Degree, mode: Mode },
    Unknown,
}

impl Gesture {
    pub fn degree(self) -> Option<Degree> {
        match self {
            Gesture::Chord { degree, .. } => Some(degree),
            Gesture::Unknown => None,
        }
    }

    pub fn mode(self) -> Option<Mode> {
        match self {
            Gesture::Chord { mode, .. } => Some(mode),
            Gesture::Unknown => None,
        }
    }

    /// `"2 (acoustic)"`, `"Unknown (N/A)"`.
    pub fn label(self) -> String {
        match self {
            Gesture::Chord { degree, mode } => format!("{} ({})", degree.symbol(), mode.as_str()),
            Gesture::Unknown => "Unknown (N/A)".to_string(),
        }
    }
}

/// Finger patterns (index bit lowest) for degrees 1..=7. Shared by both modes.
const CHORD_SHAPES: [(u8, Degree); 7] = [
    (0b0001, Degree::One),
    (0b0011, Degree::Two),
    (0b0111, Degree::Three),
    (0b1111, Degree::Four),
    (0b1000, Degree::Five),
    (0b1100, Degree::Six),
    (0b1110, Degree::Seven),
];

/// Look a gesture key up in the chord tables.
pub fn lookup(key: GestureKey) -> Gesture {
    let mode = if key.thumb_open() {
        Mode::Distorted
    } else {
        Mode::Acoustic
    };

    CHORD_SHAPES
        .iter()
        .find(|(shape, _)| *shape == key.finger_bits())
        .map(|&(_, degree)| Gesture::Chord { degree, mode })
        .unwrap_or(Gesture::Unknown)
}

/// Classify a hand into a chord gesture.
pub fn classify(hand: &HandLandmarks) -> Gesture {
    let key = GestureKey::from_hand(hand);
    let gesture = lookup(key);
    trace!("gesture key {:05b} -> {:?}", key.bits(), gesture);
    gesture
}

#[cfg(test)]
mod tests {
    use super::*;

    const F: bool = false;
    const T: bool = true;

    #[test]
    fn acoustic_table() {
        let cases = [
            ([F, T, F, F, F], Degree::One),
            ([F, T, T, F, F], Degree::Two),
            ([F, T, T, T, F], Degree::Three),
            ([F, T, T, T, T], Degree::Four),
            ([F, F, F, F, T], Degree::Five),
            ([F, F, F, T, T], Degree::Six),
            ([F, F, T, T, T], Degree::Seven),
        ];
        for (flags, degree) in cases {
            assert_eq!(
                lookup(GestureKey::from_tuple(flags)),
                Gesture::Chord { degree, mode: Mode::Acoustic },
                "flags {:?}",
                flags
            );
        }
    }

    #[test]
    fn thumb_open_selects_distorted() {
        let key = GestureKey::from_tuple([T, T, T, F, F]);
        assert_eq!(
            lookup(key),
            Gesture::Chord { degree: Degree::Two, mode: Mode::Distorted }
        );
    }

    #[test]
    fn for_chord_inverts_lookup() {
        for mode in Mode::ALL {
            for degree in Degree::ALL {
                let key = GestureKey::for_chord(degree, mode);
                assert_eq!(lookup(key), Gesture::Chord { degree, mode });
            }
        }
        assert_eq!(GestureKey::for_chord(Degree::Five, Mode::Acoustic).bits(), 0b1_0000);
    }

    #[test]
    fn unmatched_keys_are_unknown() {
        let chords = (0u8..32)
            .map(GestureKey::from_bits)
            .filter(|k| lookup(*k) != Gesture::Unknown)
            .count();
        assert_eq!(chords, 14);

        for flags in [[F, F, F, F, F], [T, F, F, F, F], [F, F, T, F, F], [T, T, F, T, F]] {
            let g = lookup(GestureKey::from_tuple(flags));
            assert_eq!(g, Gesture::Unknown);
            assert_eq!(g.degree(), None);
            assert_eq!(g.mode(), None);
        }
    }

    #[test]
    fn each_chord_appears_once_per_mode() {
        for mode in Mode::ALL {
            for degree in Degree::ALL {
                let hits = (0u8..32)
                    .filter(|&b| lookup(GestureKey::from_bits(b)) == Gesture::Chord { degree, mode })
                    .count();
                assert_eq!(hits, 1, "{:?} {:?}", degree, mode);
            }
        }
    }

    #[test]
    fn key_reads_thumb_and_fingers() {
        let key = GestureKey::new(true, [false, true, false, true]);
        assert!(key.thumb_open());
        assert!(!key.finger_extended(0));
        assert!(key.finger_extended(1));
        assert!(!key.finger_extended(2));
        assert!(key.finger_extended(3));
        assert_eq!(key.bits(), 0b10101);
    }

    #[test]
    fn classifies_synthetic_hands() {
        for bits in 0u8..32 {
            let key = GestureKey::from_bits(bits);
            let hand = HandLandmarks::posed(key);
            assert_eq!(GestureKey::from_hand(&hand), key);
            assert_eq!(classify(&hand), lookup(key));
        }
    }

    #[test]
    fn thumb_needs_strict_ordering() {
        let mut hand = HandLandmarks::posed(GestureKey::from_tuple([T, T, F, F, F]));
        // Tip level with the IP joint is not open.
        hand.points[hand::THUMB_TIP].x = hand.points[hand::THUMB_IP].x;
        assert!(!GestureKey::from_hand(&hand).thumb_open());
    }

    #[test]
    fn finger_level_with_pip_is_curled() {
        let mut hand = HandLandmarks::posed(GestureKey::from_tuple([F, T, F, F, F]));
        hand.points[hand::INDEX_TIP].y = hand.points[hand::INDEX_PIP].y;
        assert_eq!(classify(&hand), Gesture::Unknown);
    }

    #[test]
    fn labels() {
        let g = Gesture::Chord { degree: Degree::Two, mode: Mode::Acoustic };
        assert_eq!(g.label(), "2 (acoustic)");
        assert_eq!(Gesture::Unknown.label(), "Unknown (N/A)");
        assert_eq!(Degree::from_symbol("7"), Some(Degree::Seven));
        assert_eq!(Degree::from_symbol("8"), None);
        assert_eq!(Mode::from_name("distorted"), Some(Mode::Distorted));
    }

    #[test]
    fn mode_gain() {
        assert_eq!(Mode::Acoustic.gain(), 0.7);
        assert_eq!(Mode::Distorted.gain(), 0.8);
    }
}
