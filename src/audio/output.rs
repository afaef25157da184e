#[cfg(feature = "rtrb")]
use rtrb::{Producer, PushError};
#[cfg(feature = "rtrb")]
use tracing::warn;

#[cfg(feature = "rtrb")]
use super::ChannelMessage;
use crate::chord::Sound;

/// Six dedicated playback channels, one per string.
///
/// Playback is fire-and-forget: nothing reports back when a sound ends.
pub trait StringOutput {
    /// Silence whatever is playing on `string`.
    fn stop(&mut self, string: usize);
    /// Start `sound` on `string`.
    fn play(&mut self, string: usize, sound: &Sound);
}

#[cfg(feature = "rtrb")]
impl StringOutput for Producer<ChannelMessage> {
    fn stop(&mut self, string: usize) {
        if let Err(PushError::Full(_)) = self.push(ChannelMessage::Stop { string }) {
            warn!("audio queue full, dropped stop on string {}", string);
        }
    }

    fn play(&mut self, string: usize, sound: &Sound) {
        let msg = ChannelMessage::Play {
            string,
            sound: sound.clone(),
        };
        if let Err(PushError::Full(_)) = self.push(msg) {
            warn!("audio queue full, dropped play on string {}", string);
        }
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullOutput;

impl StringOutput for NullOutput {
    fn stop(&mut self, _string: usize) {}

    fn play(&mut self, _string: usize, _sound: &Sound) {}
}

#[derive(Clone, Debug)]
pub enum OutputEvent {
    Stop { string: usize },
    Play { string: usize, sound: Sound },
}

impl OutputEvent {
    pub fn string(&self) -> usize {
        match self {
            OutputEvent::Stop { string } | OutputEvent::Play { string, .. } => *string,
        }
    }

    pub fn is_play(&self) -> bool {
        matches!(self, OutputEvent::Play { .. })
    }
}

/// Keeps every call in order. Useful headless and in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingOutput {
    pub events: Vec<OutputEvent>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<OutputEvent> {
        std::mem::take(&mut self.events)
    }
}

impl StringOutput for RecordingOutput {
    fn stop(&mut self, string: usize) {
        self.events.push(OutputEvent::Stop { string });
    }

    fn play(&mut self, string: usize, sound: &Sound) {
        self.events.push(OutputEvent::Play {
            string,
            sound: sound.clone(),
        });
    }
}

#[cfg(all(test, feature = "rtrb"))]
mod tests {
    use super::*;
    use crate::audio::MessageReceiver;
    use rtrb::RingBuffer;

    #[test]
    fn producer_forwards_stop_then_play() {
        let (mut tx, mut rx) = RingBuffer::<ChannelMessage>::new(8);
        let sound = Sound::new(vec![0.1; 4], 48_000, 0.7);

        tx.stop(3);
        tx.play(3, &sound);

        assert!(matches!(MessageReceiver::pop(&mut rx), Some(ChannelMessage::Stop { string: 3 })));
        match MessageReceiver::pop(&mut rx) {
            Some(ChannelMessage::Play { string, sound: s }) => {
                assert_eq!(string, 3);
                assert!(s.same_buffer(&sound));
            }
            other => panic!("expected play, got {:?}", other),
        }
        assert!(MessageReceiver::pop(&mut rx).is_none());
    }

    #[test]
    fn full_queue_drops_without_panicking() {
        let (mut tx, _rx) = RingBuffer::<ChannelMessage>::new(1);
        tx.stop(0);
        tx.stop(1);
    }
}
