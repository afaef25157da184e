//! TUI for aerostrum
//!
//! Drives the session once per UI tick and draws its overlay.

mod stage;
mod status;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;
use tracing::warn;

use aerostrum::audio::ChannelMessage;
use aerostrum::chord::WavLoader;
use aerostrum::visual::Rgb;
use aerostrum::{FrameReport, SessionController};

use super::sim::Simulator;
use stage::render_stage;
use status::render_status;

pub type Session = SessionController<WavLoader, Producer<ChannelMessage>>;

/// Level meter decay per tick.
const LEVEL_DECAY: f32 = 0.85;

pub struct UiApp {
    session: Session,
    sim: Simulator,
    /// Per-callback output peaks from the audio thread
    level_rx: Consumer<f32>,
    level: f32,
    sample_rate: f32,
    last_report: FrameReport,
    should_quit: bool,
}

impl UiApp {
    pub fn new(session: Session, sim: Simulator, level_rx: Consumer<f32>, sample_rate: f32) -> Self {
        Self {
            session,
            sim,
            level_rx,
            level: 0.0,
            sample_rate,
            last_report: FrameReport::default(),
            should_quit: false,
        }
    }

    /// One session frame per draw, ~60fps.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_level();

            let input = self.sim.step();
            self.last_report = self.session.process_frame(&input);

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        // Don't leave strings ringing after the UI is gone; the caller keeps
        // the stream open long enough for this to be played out.
        if self.session.output_mut().push(ChannelMessage::StopAll).is_err() {
            warn!("audio queue full, strings may ring until the stream closes");
        }
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.session.frame()
    }

    fn poll_level(&mut self) {
        self.level *= LEVEL_DECAY;
        while let Ok(peak) = self.level_rx.pop() {
            self.level = self.level.max(peak);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            other => {
                self.sim.handle_key(other);
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(10),   // Camera view
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_status(
            frame,
            chunks[0],
            &self.session,
            &self.last_report,
            self.level,
            self.sample_rate,
        );

        let config = self.session.config();
        render_stage(
            frame,
            chunks[1],
            &self.session.overlay(),
            (config.frame_width, config.frame_height),
            (self.sim.hand_visible(), self.sim.pose_visible()),
        );

        let help = Paragraph::new(
            " [1-7] Chord  [0] Fist  [T] Thumb  [Arrows] Move  [Space] Strum  [H/P] Hide hand/pose  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
