//! Application builder: audio device, session and UI wiring.

use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use rtrb::RingBuffer;
use tracing::{error, info, warn};

use aerostrum::audio::{ChannelMessage, StringPlayer};
use aerostrum::{SessionConfig, SessionController, MAX_BLOCK_SIZE};

use super::sim::Simulator;
use super::ui::UiApp;

/// Frame loop to audio thread. A full strum is twelve messages.
const MESSAGE_QUEUE_SIZE: usize = 256;
/// Audio thread to UI, one peak per callback.
const LEVEL_QUEUE_SIZE: usize = 64;
/// Time given to the audio callback to pick up the final `StopAll`.
const SHUTDOWN_DRAIN: Duration = Duration::from_millis(50);

pub struct Aerostrum {
    config: SessionConfig,
}

impl Aerostrum {
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
        }
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Open the audio device and run the UI until the user quits.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = stream_config.sample_rate().0 as f32;
        let channels = stream_config.channels() as usize;
        info!("audio output {} Hz, {} channels", sample_rate, channels);

        if !self.config.asset_root.is_dir() {
            warn!(
                "asset root {} does not exist; every chord will be silent",
                self.config.asset_root.display()
            );
        }

        let (msg_tx, msg_rx) = RingBuffer::<ChannelMessage>::new(MESSAGE_QUEUE_SIZE);
        let (mut level_tx, level_rx) = RingBuffer::<f32>::new(LEVEL_QUEUE_SIZE);

        // The player lives on the audio thread; the session only holds the
        // producer end.
        let mut player = StringPlayer::new(sample_rate, msg_rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &stream_config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;
                let mut peak = 0.0f32;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];
                    player.render_block(block);

                    // Mono to all channels
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        peak = peak.max(s.abs());
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }

                // UI only wants the latest level; drop it if nobody is reading
                let _ = level_tx.push(peak);
            },
            |err| error!("audio stream error: {}", err),
            None,
        )?;
        stream.play()?;

        let strum_landmark = self.config.strum_landmark;
        let session = SessionController::new(self.config, msg_tx);
        let mut app = UiApp::new(session, Simulator::new(strum_landmark), level_rx, sample_rate);

        let mut terminal = ratatui::init();
        let result = app.run(&mut terminal);
        ratatui::restore();

        // Keep the stream open until the callback has drained StopAll
        std::thread::sleep(SHUTDOWN_DRAIN);
        drop(stream);

        info!("exiting after {} frames", app.frames());
        result
    }
}

impl Default for Aerostrum {
    fn default() -> Self {
        Self::new()
    }
}
