use crate::chord::Sound;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Free,    // Nothing loaded
    Playing, // Reading through a sound
}

/// One-shot sample playback for a single string.
///
/// The sound is read at `sound_rate / output_rate` samples per output
/// sample, with linear interpolation, and the voice frees itself at the
/// end of the buffer.
pub struct SampleVoice {
    sound: Option<Sound>,
    position: f64,
    step: f64,
    output_rate: f32,
}

impl SampleVoice {
    pub fn new(output_rate: f32) -> Self {
        Self {
            sound: None,
            position: 0.0,
            step: 1.0,
            output_rate,
        }
    }

    /// Start `sound` from the top, replacing anything already playing.
    ///
    /// A 0 Hz sound would never advance, so it just silences the voice.
    pub fn start(&mut self, sound: Sound) {
        if sound.sample_rate() == 0 {
            self.stop();
            return;
        }
        self.step = sound.sample_rate() as f64 / self.output_rate.max(1.0) as f64;
        self.position = 0.0;
        self.sound = Some(sound);
    }

    pub fn stop(&mut self) {
        self.sound = None;
        self.position = 0.0;
    }

    pub fn render(&mut self, out: &mut [f32]) {
        let Some(sound) = &self.sound else {
            out.fill(0.0);
            return;
        };

        let samples = sound.samples();
        let gain = sound.gain();
        let last = samples.len().saturating_sub(1);
        let mut finished = false;

        for o in out.iter_mut() {
            let idx = self.position as usize;
            if idx >= samples.len() {
                *o = 0.0;
                finished = true;
                continue;
            }
            let frac = (self.position - idx as f64) as f32;
            let a = samples[idx];
            let b = samples[(idx + 1).min(last)];
            *o = (a + (b - a) * frac) * gain;
            self.position += self.step;
        }

        if finished || self.position as usize >= samples.len() {
            self.stop();
        }
    }

    pub fn state(&self) -> VoiceState {
        if self.sound.is_some() {
            VoiceState::Playing
        } else {
            VoiceState::Free
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == VoiceState::Playing
    }
}
