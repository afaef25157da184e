use std::path::Path;
use std::sync::Arc;

use crate::error::{AssetError, Result};

/// A decoded, playable recording of one string.
///
/// Samples are mono; the gain is applied at playback. Cloning shares the
/// sample buffer.
#[derive(Clone, Debug)]
pub struct Sound {
    samples: Arc<[f32]>,
    sample_rate: u32,
    gain: f32,
}

impl Sound {
    pub fn new(samples: impl Into<Arc<[f32]>>, sample_rate: u32, gain: f32) -> Self {
        Self {
            samples: samples.into(),
            sample_rate,
            gain,
        }
    }

    /// Decode a WAV file, mixing all channels down to mono.
    pub fn from_wav(path: &Path, gain: f32) -> Result<Self> {
        let decode = |source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let reader = hound::WavReader::open(path).map_err(decode)?;
        let spec = reader.spec();
        if spec.sample_rate == 0 {
            return Err(AssetError::ZeroSampleRate(path.to_path_buf()));
        }
        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(decode)?,
            hound::SampleFormat::Int => {
                let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .collect::<std::result::Result<Vec<i32>, _>>()
                    .map_err(decode)?
                    .into_iter()
                    .map(|s| s as f32 / max_val)
                    .collect()
            }
        };

        let channels = spec.channels.max(1) as usize;
        let mono: Vec<f32> = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();

        if mono.is_empty() {
            return Err(AssetError::Empty(path.to_path_buf()));
        }

        Ok(Self::new(mono, spec.sample_rate, gain))
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate.max(1) as f32
    }

    /// True if both handles share one sample buffer.
    pub fn same_buffer(&self, other: &Sound) -> bool {
        Arc::ptr_eq(&self.samples, &other.samples)
    }
}
