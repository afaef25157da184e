//! Status bar - active chord, gesture, frame counter and output level

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use aerostrum::visual::marker_color;
use aerostrum::FrameReport;

use super::{color, Session};

pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    report: &FrameReport,
    level: f32,
    sample_rate: f32,
) {
    let block = Block::default().title(" aerostrum ").borders(Borders::ALL);

    let active = session.active_chord();
    let chord = match active {
        Some((chord, mode)) => format!("{} {} ({})", chord, chord.roman(), mode.as_str()),
        None => "no chord".to_string(),
    };

    // Strings with a sound out of those in the chord
    let loaded = session
        .assets()
        .map(|set| format!("{}/6 strings  ", set.loaded()))
        .unwrap_or_default();

    let gesture = match report.gesture {
        Some(g) => g.label(),
        None => "no hand".to_string(),
    };

    let meter_len = (level.clamp(0.0, 1.0) * 10.0).round() as usize;
    let meter = format!("{:<10}", "|".repeat(meter_len));

    let line = Line::from(vec![
        Span::styled(
            format!(" {}  ", chord),
            Style::default().fg(color(marker_color(active.map(|(_, mode)| mode)))),
        ),
        Span::styled(loaded, Style::default().fg(Color::DarkGray)),
        Span::styled(format!("Hand: {}  ", gesture), Style::default().fg(Color::White)),
        Span::styled(
            format!("Frame {}  ", report.frame),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:.1}kHz  ", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("[{}]", meter), Style::default().fg(Color::Magenta)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
