//! New manual task dialog.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::ThemeColors;

pub fn render(frame: &mut Frame, input: &str, colors: &ThemeColors) {
    let area = frame.area();

    let popup_width = 60u16.min(area.width.saturating_sub(4));
    let popup_height = 7u16;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" New Task ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [_, input_area, _, hint_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    let input_line = Line::from(vec![
        Span::styled(" Title: ", Style::default().fg(colors.muted)),
        Span::styled(input, Style::default().fg(colors.text)),
        Span::styled("█", Style::default().fg(colors.highlight)),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    let hint_line = Line::from(vec![
        Span::styled(
            " Enter",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" create   ", Style::default().fg(colors.muted)),
        Span::styled(
            "Esc",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]);
    frame.render_widget(Paragraph::new(hint_line), hint_area);
}
