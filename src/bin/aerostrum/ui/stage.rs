//! Camera view: strings, strum marker and chord hand box on a canvas.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line, Rectangle},
        Block, Borders,
    },
    Frame,
};

use aerostrum::strum::Rect as PixelRect;
use aerostrum::visual::Overlay;

use super::color;

/// Render the overlay in frame pixel space.
///
/// Canvas y grows upward while frame y grows downward, so every y is
/// flipped against the frame height.
pub fn render_stage(
    frame: &mut Frame,
    area: Rect,
    overlay: &Overlay,
    (width, height): (u32, u32),
    (hand_visible, pose_visible): (bool, bool),
) {
    let title = match (hand_visible, pose_visible) {
        (true, true) => " Camera ".to_string(),
        (false, true) => " Camera (no hand) ".to_string(),
        (true, false) => " Camera (no pose) ".to_string(),
        (false, false) => " Camera (empty) ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let w = width as f64;
    let h = height as f64;
    let flip = |y: i32| h - y as f64;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, w])
        .y_bounds([0.0, h])
        .paint(|ctx| {
            ctx.draw(&rectangle(&overlay.region, h, Color::DarkGray));

            for s in &overlay.strings {
                let y = flip(s.y);
                ctx.draw(&Line::new(s.x_start as f64, y, s.x_end as f64, y, color(s.color)));
            }

            if let Some(hand_box) = &overlay.hand_box {
                ctx.draw(&rectangle(hand_box, h, color(overlay.gesture_color)));
            }

            if let Some(p) = overlay.strum_point {
                ctx.draw(&Circle {
                    x: p.x as f64,
                    y: flip(p.y),
                    radius: 12.0,
                    color: color(overlay.marker_color),
                });
            }

            ctx.layer();

            for s in &overlay.strings {
                ctx.print(
                    (s.x_start - 40) as f64,
                    flip(s.y),
                    Span::styled(s.label, Style::default().fg(color(s.color))),
                );
            }

            if let (Some(label), Some(hand_box)) = (&overlay.gesture_label, &overlay.hand_box) {
                let style = Style::default().fg(color(overlay.gesture_color));
                ctx.print(
                    hand_box.left as f64,
                    flip(hand_box.top - 10),
                    Span::styled(label.clone(), style),
                );
                if let Some(numeral) = overlay.numeral {
                    ctx.print(
                        hand_box.left as f64,
                        flip(hand_box.bottom + 40),
                        Span::styled(numeral, style),
                    );
                }
            }

            if let Some(p) = overlay.strum_point {
                ctx.print(
                    p.x as f64 + 30.0,
                    flip(p.y),
                    Span::styled(
                        format!("Strum: {}", overlay.strum_label),
                        Style::default().fg(color(overlay.marker_color)),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn rectangle(r: &PixelRect, height: f64, color: Color) -> Rectangle {
    Rectangle {
        x: r.left as f64,
        y: height - r.bottom as f64,
        width: r.width() as f64,
        height: r.height() as f64,
        color,
    }
}
