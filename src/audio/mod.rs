// Purpose: get triggers from the frame loop to the speakers
// One dedicated voice per string; the frame loop talks to it through messages

pub mod message;
pub mod output;
pub mod player;
pub mod voice;

pub use message::{ChannelMessage, MessageReceiver};
pub use output::{NullOutput, OutputEvent, RecordingOutput, StringOutput};
pub use player::StringPlayer;
pub use voice::{SampleVoice, VoiceState};
