use super::{ChannelMessage, MessageReceiver, SampleVoice};
use crate::{MAX_BLOCK_SIZE, NUM_STRINGS};

/// Audio-thread side of the string channels: drains commands, then mixes
/// the six string voices into a mono block.
pub struct StringPlayer<R: MessageReceiver> {
    voices: [SampleVoice; NUM_STRINGS],
    rx: R,
    temp_buffer: Vec<f32>,
    frame_counter: u64,
}

impl<R: MessageReceiver> StringPlayer<R> {
    pub fn new(sample_rate: f32, rx: R) -> Self {
        Self {
            voices: std::array::from_fn(|_| SampleVoice::new(sample_rate)),
            rx,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
            frame_counter: 0,
        }
    }

    /// `out.len()` must not exceed [`MAX_BLOCK_SIZE`].
    pub fn render_block(&mut self, out: &mut [f32]) {
        // Process control messages
        while let Some(msg) = self.rx.pop() {
            match msg {
                ChannelMessage::Play { string, sound } => {
                    if let Some(voice) = self.voices.get_mut(string) {
                        voice.start(sound);
                    }
                }
                ChannelMessage::Stop { string } => {
                    if let Some(voice) = self.voices.get_mut(string) {
                        voice.stop();
                    }
                }
                ChannelMessage::StopAll => {
                    for voice in &mut self.voices {
                        voice.stop();
                    }
                }
            }
        }

        // Mix voices
        out.fill(0.0);
        for voice in &mut self.voices {
            if voice.is_active() {
                let tmp = &mut self.temp_buffer[..out.len()];
                voice.render(tmp);

                for (o, v) in out.iter_mut().zip(tmp.iter()) {
                    *o += v;
                }
            }
        }

        self.frame_counter += out.len() as u64;
    }

    pub fn is_playing(&self, string: usize) -> bool {
        self.voices.get(string).is_some_and(SampleVoice::is_active)
    }

    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    /// Output frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frame_counter
    }
}
