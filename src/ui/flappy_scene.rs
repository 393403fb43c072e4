//! UI rendering for the Flappy Bird game screen.

use crate::game::types::Snapshot;
use crate::ui::game_common::{
    create_game_layout, render_banner, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What a single terminal cell of the play field shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    Floor,
}

/// Classify the field point `(x, y)`, in field pixels.
pub fn classify(snapshot: &Snapshot, x: f64, y: f64) -> Cell {
    if y >= snapshot.floor_y {
        return Cell::Floor;
    }
    let in_pipe = snapshot.obstacles.iter().any(|o| {
        x >= o.x && x < o.x + o.width && (y < o.gap_top || y > o.gap_bottom)
    });
    if in_pipe {
        Cell::Pipe
    } else {
        Cell::Sky
    }
}

/// Width in field pixels of one stripe of the floor pattern.
const FLOOR_STRIPE: f64 = 25.0;

/// Floor glyph at field x, shifted by the floor's scroll offset.
pub fn floor_glyph(x: f64, scroll: f64) -> &'static str {
    if ((x + scroll) / FLOOR_STRIPE).floor().rem_euclid(2.0) == 0.0 {
        "▒"
    } else {
        "░"
    }
}

/// Bird glyph for a tilt in degrees (positive = nose up).
pub fn bird_glyph(rotation: f64) -> &'static str {
    if rotation > 10.0 {
        "▲"
    } else if rotation < -10.0 {
        "▼"
    } else {
        "►"
    }
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let border_color = if snapshot.alive {
        Color::Cyan
    } else {
        Color::Red
    };
    let layout = create_game_layout(frame, area, " Flappy Bird ", border_color, 22);

    render_play_area(frame, layout.content, snapshot);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot);

    if !snapshot.alive {
        render_banner(
            frame,
            layout.content,
            "CRASH!",
            &format!("You passed {} pipes", snapshot.score),
            Color::Red,
        );
    }
}

/// Render the play field scaled to the available area.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let x_scale = snapshot.field_width / width as f64;
    let y_scale = snapshot.field_height / height as f64;

    let bird_center_x = snapshot.bird.x + snapshot.bird.width / 2.0;
    let bird_center_y = snapshot.bird.y + snapshot.bird.height / 2.0;
    let bird_col = (bird_center_x / x_scale).floor();
    let bird_row = (bird_center_y / y_scale).floor();

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width);
        let y = (row as f64 + 0.5) * y_scale;

        for col in 0..width {
            if row as f64 == bird_row && col as f64 == bird_col {
                let color = if snapshot.alive {
                    Color::Yellow
                } else {
                    Color::Red
                };
                spans.push(Span::styled(
                    bird_glyph(snapshot.bird_rotation),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let x = (col as f64 + 0.5) * x_scale;
            let span = match classify(snapshot, x, y) {
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::Floor => Span::styled(
                    floor_glyph(x, snapshot.floor_scroll),
                    Style::default().fg(Color::Yellow),
                ),
                Cell::Sky => Span::raw(" "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);

    // Score top-left, high score top-right, over the field.
    let score_line = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", snapshot.score),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        score_line,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("High Score: {} ", snapshot.high_score),
            Style::default().fg(Color::White),
        ))
        .alignment(Alignment::Right),
        score_line,
    );
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let controls = [("[Space/Up/Enter]", "Flap"), ("[Esc/Q]", "Quit")];
    if snapshot.alive {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", snapshot.score),
            Color::Green,
            &controls,
        );
    } else {
        render_status_bar(frame, area, "Restarting soon...", Color::Red, &controls);
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (state_text, state_color) = if snapshot.alive {
        ("Flying", Color::Green)
    } else {
        ("Crashed", Color::Red)
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", state_text),
            Style::default()
                .fg(state_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.obstacles.len()),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
