//! Bottom bar: key hints, loading spinner, last error.

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::ThemeColors;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const SHORTCUTS: &[(&str, &str)] = &[
    ("s", "slack"),
    ("e", "emails"),
    ("c", "calendar"),
    ("a", "summary"),
    ("n", "new"),
    ("space", "done"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &ThemeColors) {
    let mut spans = vec![Span::raw(" ")];

    if app.loading {
        let tick = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis()
            / 100;
        let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("{} Loading...  ", spinner),
            Style::default().fg(colors.highlight),
        ));
    }

    if let Some(error) = &app.error {
        spans.push(Span::styled(
            format!("{}  ", error),
            Style::default().fg(colors.error),
        ));
    }

    for (i, (key, desc)) in SHORTCUTS.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));
        if i < SHORTCUTS.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(paragraph, area);
}
