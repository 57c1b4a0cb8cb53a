//! Top bar: title plus task counters.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::ThemeColors;

pub const HEADER_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &ThemeColors) {
    let open = app.tasks.iter().filter(|t| !t.done).count();

    let left = Span::styled(
        " Bawi Dashboard",
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    );
    let right = Span::styled(
        format!("{} tasks, {} open ", app.tasks.len(), open),
        Style::default().fg(colors.muted),
    );

    let inner_width = area.width.saturating_sub(2) as usize;
    let padding = " ".repeat(inner_width.saturating_sub(left.width() + right.width()));
    let line = Line::from(vec![left, Span::raw(padding), right]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(paragraph, area);
}
