//! AI summary panel.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme::ThemeColors;

pub fn render(frame: &mut Frame, area: Rect, summary: &str, colors: &ThemeColors) {
    let block = Block::default()
        .title(" AI Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = if summary.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "Press a to summarize the current tasks",
            Style::default().fg(colors.muted),
        )))
    } else {
        Paragraph::new(summary).style(Style::default().fg(colors.text))
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
