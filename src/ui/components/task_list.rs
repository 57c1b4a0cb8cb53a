//! The unified task list.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::model::Task;
use crate::theme::ThemeColors;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    if app.tasks.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. s: Slack  e: Emails  c: Calendar  n: manual task",
            Style::default().fg(colors.muted),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .map(|t| ListItem::new(task_line(t, width, colors)))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn task_line<'a>(task: &'a Task, width: usize, colors: &ThemeColors) -> Line<'a> {
    let checkbox = if task.done { "[x] " } else { "[ ] " };
    let tag = format!("[{}] ", task.source.label());

    let title_style = if task.done {
        Style::default()
            .fg(colors.done)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(colors.text)
    };

    let used = checkbox.len() + tag.len() + task.title.len() + 3;
    let description = truncate(&task.description, width.saturating_sub(used));

    Line::from(vec![
        Span::styled(checkbox, Style::default().fg(colors.muted)),
        Span::styled(tag, Style::default().fg(colors.highlight)),
        Span::styled(task.title.as_str(), title_style),
        Span::styled(
            format!("  {}", description),
            Style::default().fg(colors.muted),
        ),
    ])
}

/// Truncate on a char boundary, with an ellipsis when anything was cut
fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        assert_eq!(truncate("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_flattens_newlines() {
        assert_eq!(truncate("a\nb", 10), "a b");
    }
}
