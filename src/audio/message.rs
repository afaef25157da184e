#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::chord::Sound;

/// Commands from the frame loop to the audio callback.
#[derive(Debug, Clone)]
pub enum ChannelMessage {
    Play { string: usize, sound: Sound },
    Stop { string: usize },
    StopAll,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ChannelMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ChannelMessage> {
    fn pop(&mut self) -> Option<ChannelMessage> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for std::collections::VecDeque<ChannelMessage> {
    fn pop(&mut self) -> Option<ChannelMessage> {
        self.pop_front()
    }
}
