use std::path::PathBuf;

use thiserror::Error;

/// Why a sound asset could not be turned into a playable [`Sound`](crate::chord::Sound).
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("{0} has a sample rate of 0 Hz")]
    ZeroSampleRate(PathBuf),

    #[error("{0} contains no samples")]
    Empty(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssetError>;
