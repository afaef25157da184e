//! Chord names and the sound assets behind them.
//!
//! Each of the seven diatonic chords of C major is reached from a gesture
//! [`Degree`]. Its recordings live on disk as one file per string:
//!
//! ```text
//! <root>/<mode>/<chord>/string1.wav
//! <root>/<mode>/<chord>/string2.wav
//! ...
//! <root>/<mode>/<chord>/string6.wav
//! ```

mod library;
mod sound;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::gesture::Degree;

pub use library::{AssetIssue, ChordAssetSet, ChordLibrary, SoundLoader, WavLoader};
pub use sound::Sound;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chord {
    C,
    Dm,
    Em,
    F,
    G,
    Am,
    Bdim,
}

impl Chord {
    pub const ALL: [Chord; 7] = [
        Chord::C,
        Chord::Dm,
        Chord::Em,
        Chord::F,
        Chord::G,
        Chord::Am,
        Chord::Bdim,
    ];

    /// Chord name table, keyed by gesture degree.
    pub fn from_degree(degree: Degree) -> Self {
        match degree {
            Degree::One => Chord::C,
            Degree::Two => Chord::Dm,
            Degree::Three => Chord::Em,
            Degree::Four => Chord::F,
            Degree::Five => Chord::G,
            Degree::Six => Chord::Am,
            Degree::Seven => Chord::Bdim,
        }
    }

    /// Also the asset directory name.
    pub fn name(self) -> &'static str {
        match self {
            Chord::C => "C",
            Chord::Dm => "Dm",
            Chord::Em => "Em",
            Chord::F => "F",
            Chord::G => "G",
            Chord::Am => "Am",
            Chord::Bdim => "Bdim",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn roman(self) -> &'static str {
        match self {
            Chord::C => "I",
            Chord::Dm => "II",
            Chord::Em => "III",
            Chord::F => "IV",
            Chord::G => "V",
            Chord::Am => "VI",
            Chord::Bdim => "VII°",
        }
    }
}

impl From<Degree> for Chord {
    fn from(degree: Degree) -> Self {
        Chord::from_degree(degree)
    }
}

impl std::fmt::Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
