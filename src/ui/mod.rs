//! TUI rendering.

pub mod components;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::App;
use crate::theme;

/// Render one frame
pub fn render(frame: &mut Frame, app: &mut App) {
    let colors = theme::DARK;

    let [header_area, main_area, footer_area] = Layout::vertical([
        Constraint::Length(components::header::HEADER_HEIGHT),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let [list_area, summary_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(main_area);

    components::header::render(frame, header_area, app, &colors);
    components::task_list::render(frame, list_area, app, &colors);
    components::summary_panel::render(frame, summary_area, &app.summary, &colors);
    components::status_bar::render(frame, footer_area, app, &colors);

    if app.show_new_task_dialog {
        components::new_task_dialog::render(frame, &app.new_task_input, &colors);
    }

    if let Some(toast) = &app.toast {
        components::toast::render(frame, &toast.message, &colors);
    }
}
