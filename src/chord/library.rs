use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{Chord, Sound};
use crate::error::{AssetError, Result};
use crate::gesture::Mode;
use crate::NUM_STRINGS;

/// Turns one asset file into a [`Sound`].
///
/// This is the only place the library touches audio decoding, so a cached or
/// background loader can be dropped in without changing the session.
pub trait SoundLoader {
    fn load(&self, path: &Path, gain: f32) -> Result<Sound>;
}

/// Decodes WAV files from disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct WavLoader;

impl SoundLoader for WavLoader {
    fn load(&self, path: &Path, gain: f32) -> Result<Sound> {
        Sound::from_wav(path, gain)
    }
}

impl<F> SoundLoader for F
where
    F: Fn(&Path, f32) -> Result<Sound>,
{
    fn load(&self, path: &Path, gain: f32) -> Result<Sound> {
        self(path, gain)
    }
}

/// Something that went wrong while loading a chord. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetIssue {
    /// The whole chord directory is absent; every string is silent.
    MissingDirectory(PathBuf),
    /// One string's file is absent.
    MissingFile { string: usize, path: PathBuf },
    /// The file exists but could not be decoded.
    Unreadable {
        string: usize,
        path: PathBuf,
        reason: String,
    },
}

/// The six per-string sounds of one (chord, mode) pair.
///
/// A `None` entry is a silent string.
#[derive(Clone, Debug)]
pub struct ChordAssetSet {
    chord: Chord,
    mode: Mode,
    sounds: [Option<Sound>; NUM_STRINGS],
    issues: Vec<AssetIssue>,
}

impl ChordAssetSet {
    pub fn new(chord: Chord, mode: Mode, sounds: [Option<Sound>; NUM_STRINGS]) -> Self {
        Self {
            chord,
            mode,
            sounds,
            issues: Vec::new(),
        }
    }

    /// All strings silent.
    pub fn silent(chord: Chord, mode: Mode) -> Self {
        Self::new(chord, mode, Default::default())
    }

    pub fn chord(&self) -> Chord {
        self.chord
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn get(&self, string: usize) -> Option<&Sound> {
        self.sounds.get(string).and_then(Option::as_ref)
    }

    pub fn sounds(&self) -> &[Option<Sound>; NUM_STRINGS] {
        &self.sounds
    }

    /// Number of strings with a sound.
    pub fn loaded(&self) -> usize {
        self.sounds.iter().filter(|s| s.is_some()).count()
    }

    pub fn issues(&self) -> &[AssetIssue] {
        &self.issues
    }
}

/// Resolves (chord, mode) pairs to sound sets from an asset directory.
///
/// Loading is synchronous and decodes up to six files, so only call
/// [`ChordLibrary::load`] when the chord or mode actually changes.
#[derive(Clone, Debug)]
pub struct ChordLibrary<L: SoundLoader = WavLoader> {
    root: PathBuf,
    loader: L,
}

impl ChordLibrary<WavLoader> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_loader(root, WavLoader)
    }
}

impl<L: SoundLoader> ChordLibrary<L> {
    pub fn with_loader(root: impl Into<PathBuf>, loader: L) -> Self {
        Self {
            root: root.into(),
            loader,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<mode>/<chord>`
    pub fn chord_dir(&self, chord: Chord, mode: Mode) -> PathBuf {
        self.root.join(mode.as_str()).join(chord.name())
    }

    /// `<root>/<mode>/<chord>/string<n>.wav`, `n` counting from 1.
    pub fn string_path(&self, chord: Chord, mode: Mode, string: usize) -> PathBuf {
        self.chord_dir(chord, mode)
            .join(format!("string{}.wav", string + 1))
    }

    /// Load the six sounds for `chord` in `mode`.
    ///
    /// Missing or unreadable assets leave that string silent and are logged;
    /// this never fails.
    pub fn load(&self, chord: Chord, mode: Mode) -> ChordAssetSet {
        let dir = self.chord_dir(chord, mode);
        let mut set = ChordAssetSet::silent(chord, mode);

        if !dir.is_dir() {
            warn!("missing {} chord folder: {}", mode.as_str(), dir.display());
            set.issues.push(AssetIssue::MissingDirectory(dir));
            return set;
        }

        for string in 0..NUM_STRINGS {
            let path = self.string_path(chord, mode, string);
            match self.load_string(&path, mode.gain()) {
                Ok(sound) => set.sounds[string] = Some(sound),
                Err(AssetError::NotFound(path)) => {
                    warn!("missing sound file: {}", path.display());
                    set.issues.push(AssetIssue::MissingFile { string, path });
                }
                Err(err) => {
                    warn!("unreadable sound file {}: {}", path.display(), err);
                    set.issues.push(AssetIssue::Unreadable {
                        string,
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            "loaded {} chord {} ({}/{} strings)",
            mode.as_str(),
            chord,
            set.loaded(),
            NUM_STRINGS
        );
        set
    }

    fn load_string(&self, path: &Path, gain: f32) -> Result<Sound> {
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }
        self.loader.load(path, gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;

    fn touch_strings(root: &Path, mode: Mode, chord: Chord, strings: &[usize]) {
        let dir = root.join(mode.as_str()).join(chord.name());
        fs::create_dir_all(&dir).unwrap();
        for s in strings {
            fs::write(dir.join(format!("string{}.wav", s)), b"stub").unwrap();
        }
    }

    fn stub_loader(path: &Path, gain: f32) -> Result<Sound> {
        let _ = path;
        Ok(Sound::new(vec![0.5; 8], 44_100, gain))
    }

    #[test]
    fn paths_follow_mode_chord_string_layout() {
        let lib = ChordLibrary::new("chords");
        assert_eq!(
            lib.string_path(Chord::Am, Mode::Distorted, 0),
            Path::new("chords").join("distorted").join("Am").join("string1.wav")
        );
        assert_eq!(
            lib.string_path(Chord::C, Mode::Acoustic, 5),
            Path::new("chords").join("acoustic").join("C").join("string6.wav")
        );
    }

    #[test]
    fn missing_directory_is_all_silent() {
        let tmp = tempfile::tempdir().unwrap();
        let calls = Cell::new(0);
        let lib = ChordLibrary::with_loader(tmp.path(), |p: &Path, g: f32| {
            calls.set(calls.get() + 1);
            stub_loader(p, g)
        });

        let set = lib.load(Chord::F, Mode::Distorted);
        assert_eq!(set.loaded(), 0);
        assert_eq!(set.issues().len(), 1);
        assert!(matches!(set.issues()[0], AssetIssue::MissingDirectory(_)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn missing_files_leave_gaps() {
        let tmp = tempfile::tempdir().unwrap();
        touch_strings(tmp.path(), Mode::Acoustic, Chord::G, &[1, 2, 3, 4]);
        let lib = ChordLibrary::with_loader(tmp.path(), stub_loader);

        let set = lib.load(Chord::G, Mode::Acoustic);
        assert_eq!(set.chord(), Chord::G);
        assert_eq!(set.mode(), Mode::Acoustic);
        for s in 0..4 {
            assert!(set.get(s).is_some(), "string {} should load", s);
        }
        assert!(set.get(4).is_none());
        assert!(set.get(5).is_none());
        assert_eq!(
            set.issues()
                .iter()
                .filter(|i| matches!(i, AssetIssue::MissingFile { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn gain_follows_mode() {
        let tmp = tempfile::tempdir().unwrap();
        touch_strings(tmp.path(), Mode::Acoustic, Chord::C, &[1]);
        touch_strings(tmp.path(), Mode::Distorted, Chord::C, &[1]);
        let lib = ChordLibrary::with_loader(tmp.path(), stub_loader);

        assert_eq!(lib.load(Chord::C, Mode::Acoustic).get(0).unwrap().gain(), 0.7);
        assert_eq!(lib.load(Chord::C, Mode::Distorted).get(0).unwrap().gain(), 0.8);
    }

    #[test]
    fn undecodable_file_is_silent_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        touch_strings(tmp.path(), Mode::Acoustic, Chord::Em, &[1, 2, 3, 4, 5, 6]);
        // The stub bytes are not a WAV file.
        let set = ChordLibrary::new(tmp.path()).load(Chord::Em, Mode::Acoustic);
        assert_eq!(set.loaded(), 0);
        assert_eq!(set.issues().len(), 6);
        assert!(set
            .issues()
            .iter()
            .all(|i| matches!(i, AssetIssue::Unreadable { .. })));
    }
}
