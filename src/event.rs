//! Keyboard event handling.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// Handle events for one tick; returns false when the app should exit
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    app.update_toast();

    // Poll with a 100ms timeout so pending bridge replies keep draining
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Dialogs capture input first
    if app.show_new_task_dialog {
        handle_new_task_dialog_key(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // Toggle done on the selected task
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // Fetch actions
        KeyCode::Char('s') => app.fetch_slack(),
        KeyCode::Char('e') => app.fetch_emails(),
        KeyCode::Char('c') => app.fetch_calendar(),

        // AI summary over the current list
        KeyCode::Char('a') => app.summarize(),

        // Manual task
        KeyCode::Char('n') => app.open_new_task_dialog(),

        _ => {}
    }
}

fn handle_new_task_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_new_task_dialog(),
        KeyCode::Enter => app.create_manual_task(),
        KeyCode::Backspace => app.new_task_delete_char(),
        KeyCode::Char(c) => app.new_task_input_char(c),
        _ => {}
    }
}
