//! Toast message, bottom-centered.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::ThemeColors;

pub fn render(frame: &mut Frame, message: &str, colors: &ThemeColors) {
    let area = frame.area();

    let toast_width = ((message.len() + 6) as u16).min(area.width.saturating_sub(4));
    let toast_height = 3;
    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_y = area.height.saturating_sub(toast_height + 4);
    let toast_area = Rect::new(toast_x, toast_y, toast_width, toast_height);

    frame.render_widget(Clear, toast_area);

    let toast = Paragraph::new(message)
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.highlight))
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(toast, toast_area);
}
