//! UI-side application state.
//!
//! All view state lives here, mutated only on the UI thread: the task list,
//! the shared loading flag, the last error, the AI summary. Bridge calls are
//! dispatched from the key handlers and their replies drained once per tick
//! by [`App::poll_results`]; provider records are mapped into tasks only when
//! a reply arrives.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::bridge::{BridgeHandle, BridgeRequest, BridgeResult};
use crate::model::{task, Task};
use crate::providers::calendar::CalendarEvent;
use crate::providers::gmail::GmailMessage;
use crate::providers::slack::SlackMessage;

/// Toast message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// The four bridge-backed actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FetchSlack,
    FetchEmails,
    FetchCalendar,
    Summarize,
}

impl Action {
    /// Fixed per-action error message shown to the user; the detailed cause
    /// stays in the backend log
    pub fn error_message(&self) -> &'static str {
        match self {
            Action::FetchSlack => "Failed to fetch Slack messages.",
            Action::FetchEmails => "Failed to fetch Gmail messages.",
            Action::FetchCalendar => "Failed to fetch Calendar events.",
            Action::Summarize => "Failed to generate AI summary.",
        }
    }
}

/// One in-flight bridge call
struct PendingCall {
    action: Action,
    reply_rx: Receiver<BridgeResult>,
}

/// Global application state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,
    /// The unified task list; fetches append, nothing dedups or sorts
    pub tasks: Vec<Task>,
    /// One loading flag shared across all four actions. Whichever in-flight
    /// action settles next clears it, matching the source behavior — not a
    /// per-action flag.
    pub loading: bool,
    /// Last action error, cleared when a new action starts
    pub error: Option<String>,
    /// AI summary, replaced wholesale per summarize call
    pub summary: String,
    /// Task list selection
    pub list_state: ListState,
    /// New-task dialog visibility
    pub show_new_task_dialog: bool,
    /// New-task dialog input buffer
    pub new_task_input: String,
    /// Toast message
    pub toast: Option<Toast>,
    /// Slack channel the fetch action targets
    slack_channel: String,
    bridge: BridgeHandle,
    pending: Vec<PendingCall>,
}

impl App {
    pub fn new(bridge: BridgeHandle, slack_channel: String) -> Self {
        Self {
            should_quit: false,
            tasks: Vec::new(),
            loading: false,
            error: None,
            summary: String::new(),
            list_state: ListState::default(),
            show_new_task_dialog: false,
            new_task_input: String::new(),
            toast: None,
            slack_channel,
            bridge,
            pending: Vec::new(),
        }
    }

    // ========== Actions ==========

    pub fn fetch_slack(&mut self) {
        let channel_id = self.slack_channel.clone();
        self.start_action(Action::FetchSlack, BridgeRequest::FetchMessages { channel_id });
    }

    pub fn fetch_emails(&mut self) {
        self.start_action(Action::FetchEmails, BridgeRequest::FetchEmails);
    }

    pub fn fetch_calendar(&mut self) {
        self.start_action(Action::FetchCalendar, BridgeRequest::FetchCalendarEvents);
    }

    pub fn summarize(&mut self) {
        let text = task::summary_input(&self.tasks);
        self.start_action(Action::Summarize, BridgeRequest::Summarize { text });
    }

    fn start_action(&mut self, action: Action, request: BridgeRequest) {
        self.loading = true;
        self.error = None;
        let reply_rx = self.bridge.call(request);
        self.pending.push(PendingCall { action, reply_rx });
    }

    /// Drain settled bridge calls. Called once per tick; each fetch runs to
    /// completion independently, in whatever order the backend finishes.
    pub fn poll_results(&mut self) {
        let mut i = 0;
        while i < self.pending.len() {
            match self.pending[i].reply_rx.try_recv() {
                Ok(result) => {
                    let call = self.pending.remove(i);
                    self.finish_action(call.action, result);
                }
                Err(TryRecvError::Empty) => i += 1,
                Err(TryRecvError::Disconnected) => {
                    let call = self.pending.remove(i);
                    self.finish_action(call.action, Err("backend unavailable".to_string()));
                }
            }
        }
    }

    fn finish_action(&mut self, action: Action, result: BridgeResult) {
        // Shared flag: any settling action clears it
        self.loading = false;

        let payload = match result {
            Ok(payload) => payload,
            Err(message) => {
                tracing::warn!(?action, %message, "action failed");
                self.error = Some(action.error_message().to_string());
                return;
            }
        };

        let mapped: Result<Vec<Task>, serde_json::Error> = match action {
            Action::FetchSlack => serde_json::from_value::<Vec<SlackMessage>>(payload)
                .map(|records| records.iter().map(Task::from_slack).collect()),
            Action::FetchEmails => serde_json::from_value::<Vec<GmailMessage>>(payload)
                .map(|records| records.iter().map(Task::from_email).collect()),
            Action::FetchCalendar => serde_json::from_value::<Vec<CalendarEvent>>(payload)
                .map(|records| records.iter().map(Task::from_event).collect()),
            Action::Summarize => {
                match serde_json::from_value::<String>(payload) {
                    Ok(summary) => {
                        self.summary = summary;
                        return;
                    }
                    Err(e) => Err(e),
                }
            }
        };

        match mapped {
            Ok(new_tasks) => {
                self.tasks.extend(new_tasks);
                self.ensure_selection();
            }
            Err(e) => {
                tracing::warn!(?action, error = %e, "malformed payload from bridge");
                self.error = Some(action.error_message().to_string());
            }
        }
    }

    // ========== Task list ==========

    /// Flip `done` on the task with this id; no-op when no task matches
    pub fn toggle_done(&mut self, task_id: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            task.done = !task.done;
        }
    }

    /// Toggle the selected task
    pub fn toggle_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let Some(id) = self.tasks.get(index).map(|t| t.id.clone()) else {
            return;
        };
        self.toggle_done(&id);
    }

    pub fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % self.tasks.len()));
    }

    pub fn select_previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 {
            self.tasks.len() - 1
        } else {
            current - 1
        };
        self.list_state.select(Some(prev));
    }

    fn ensure_selection(&mut self) {
        if !self.tasks.is_empty() && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    // ========== New Task dialog ==========

    pub fn open_new_task_dialog(&mut self) {
        self.new_task_input.clear();
        self.show_new_task_dialog = true;
    }

    pub fn close_new_task_dialog(&mut self) {
        self.show_new_task_dialog = false;
        self.new_task_input.clear();
    }

    pub fn new_task_input_char(&mut self, c: char) {
        self.new_task_input.push(c);
    }

    pub fn new_task_delete_char(&mut self) {
        self.new_task_input.pop();
    }

    /// Create a manual task from the dialog input
    pub fn create_manual_task(&mut self) {
        let title = self.new_task_input.trim().to_string();
        if title.is_empty() {
            self.show_toast("Task title cannot be empty");
            return;
        }

        self.tasks.push(Task::manual(&title));
        self.ensure_selection();
        self.close_new_task_dialog();
        self.show_toast(format!("Added: {}", title));
    }

    // ========== Toast ==========

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge;
    use crate::config::Credentials;

    /// App wired to a backend with no credentials: every bridge call settles
    /// quickly with a not-configured rejection, no network involved
    fn test_app() -> App {
        App::new(bridge::start(Credentials::default()), "C123456".to_string())
    }

    fn wait_for_settle(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !app.pending.is_empty() && Instant::now() < deadline {
            app.poll_results();
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(app.pending.is_empty(), "bridge call never settled");
    }

    fn sample_tasks(n: usize) -> Vec<Task> {
        (0..n)
            .map(|i| Task {
                id: format!("calendar-e{}", i),
                source: crate::model::TaskSource::Calendar,
                title: format!("Event {}", i),
                description: "(No description)".to_string(),
                category: "admin".to_string(),
                done: false,
            })
            .collect()
    }

    #[test]
    fn test_toggle_done_is_a_pure_flip() {
        let mut app = test_app();
        app.tasks = sample_tasks(3);

        app.toggle_done("calendar-e1");
        assert!(app.tasks[1].done);
        assert!(!app.tasks[0].done);
        assert!(!app.tasks[2].done);

        app.toggle_done("calendar-e1");
        assert!(!app.tasks[1].done);
    }

    #[test]
    fn test_toggle_done_no_match_is_noop() {
        let mut app = test_app();
        app.tasks = sample_tasks(2);
        app.toggle_done("gmail-nope");
        assert!(app.tasks.iter().all(|t| !t.done));
    }

    #[test]
    fn test_fetch_failure_sets_error_and_clears_loading() {
        let mut app = test_app();
        app.fetch_slack();
        assert!(app.loading);
        assert!(app.error.is_none());

        wait_for_settle(&mut app);
        assert!(!app.loading);
        assert_eq!(app.error.as_deref(), Some("Failed to fetch Slack messages."));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_failed_email_fetch_adds_no_tasks() {
        let mut app = test_app();
        app.tasks = sample_tasks(2);
        app.fetch_emails();
        wait_for_settle(&mut app);

        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.error.as_deref(), Some("Failed to fetch Gmail messages."));
    }

    #[test]
    fn test_successful_payload_appends_without_dedup() {
        let mut app = test_app();
        let payload = serde_json::json!([
            {"id": "e1", "summary": "Standup"},
            {"id": "e2", "summary": "Retro"}
        ]);

        app.finish_action(Action::FetchCalendar, Ok(payload.clone()));
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.tasks[0].id, "calendar-e1");
        assert_eq!(app.tasks[0].title, "Standup");
        assert_eq!(app.tasks[0].description, "(No description)");

        // Same payload again: the list doubles, nothing merges
        app.finish_action(Action::FetchCalendar, Ok(payload));
        assert_eq!(app.tasks.len(), 4);
        assert_eq!(app.tasks[2].id, "calendar-e1");
    }

    #[test]
    fn test_task_count_matches_record_count() {
        let mut app = test_app();
        let payload = serde_json::json!([
            {"ts": "1.0", "user": "U1", "text": "a"},
            {"ts": "2.0"},
            {"ts": "3.0", "text": "c"}
        ]);
        app.finish_action(Action::FetchSlack, Ok(payload));
        assert_eq!(app.tasks.len(), 3);
        assert_eq!(app.tasks[1].title, "Slack message");
        assert_eq!(app.tasks[1].description, "(No text)");
    }

    #[test]
    fn test_summarize_replaces_previous_summary() {
        let mut app = test_app();
        app.summary = "old summary".to_string();

        app.finish_action(Action::Summarize, Ok(serde_json::json!("new summary")));
        assert_eq!(app.summary, "new summary");
        assert!(!app.loading);
    }

    #[test]
    fn test_malformed_payload_sets_error() {
        let mut app = test_app();
        app.finish_action(Action::FetchCalendar, Ok(serde_json::json!({"not": "a list"})));
        assert!(app.tasks.is_empty());
        assert_eq!(
            app.error.as_deref(),
            Some("Failed to fetch Calendar events.")
        );
    }

    #[test]
    fn test_create_manual_task() {
        let mut app = test_app();
        app.open_new_task_dialog();
        for c in "Buy milk".chars() {
            app.new_task_input_char(c);
        }
        app.create_manual_task();

        assert_eq!(app.tasks.len(), 1);
        assert!(app.tasks[0].id.starts_with("manual-"));
        assert_eq!(app.tasks[0].title, "Buy milk");
        assert!(!app.show_new_task_dialog);
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_create_manual_task_rejects_empty_title() {
        let mut app = test_app();
        app.open_new_task_dialog();
        app.new_task_input_char(' ');
        app.create_manual_task();

        assert!(app.tasks.is_empty());
        // Dialog stays open waiting for real input
        assert!(app.show_new_task_dialog);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = test_app();
        app.tasks = sample_tasks(2);
        app.list_state.select(Some(0));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
    }
}
