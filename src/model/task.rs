//! The unified task entity and the fetch-and-map projections.
//!
//! Each mapping is applied independently per provider record; a missing
//! field always becomes a fixed placeholder, never a failure. Ids are
//! prefixed with the source so items from different providers can never
//! collide. There is no dedup: fetching the same provider item twice
//! produces two entries by design.

use serde::{Deserialize, Serialize};

use crate::providers::calendar::CalendarEvent;
use crate::providers::gmail::GmailMessage;
use crate::providers::slack::SlackMessage;

/// Fixed classification until categories are actually computed
pub const DEFAULT_CATEGORY: &str = "admin";

/// Where a task came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    Slack,
    Gmail,
    Calendar,
    Manual,
}

impl TaskSource {
    /// Short tag for list rendering
    pub fn label(&self) -> &'static str {
        match self {
            TaskSource::Slack => "slack",
            TaskSource::Gmail => "gmail",
            TaskSource::Calendar => "calendar",
            TaskSource::Manual => "manual",
        }
    }
}

/// One task on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// `{source}-{providerNativeId}`
    pub id: String,
    pub source: TaskSource,
    pub title: String,
    pub description: String,
    pub category: String,
    pub done: bool,
}

impl Task {
    /// Slack message → task
    pub fn from_slack(message: &SlackMessage) -> Self {
        Self {
            id: format!("slack-{}", message.ts),
            source: TaskSource::Slack,
            title: message
                .user
                .clone()
                .unwrap_or_else(|| "Slack message".to_string()),
            description: message
                .text
                .clone()
                .unwrap_or_else(|| "(No text)".to_string()),
            category: DEFAULT_CATEGORY.to_string(),
            done: false,
        }
    }

    /// Gmail message → task
    pub fn from_email(message: &GmailMessage) -> Self {
        Self {
            id: format!("gmail-{}", message.id),
            source: TaskSource::Gmail,
            title: format!("Email from {}", message.from_header().unwrap_or("unknown")),
            description: message
                .snippet
                .clone()
                .unwrap_or_else(|| "(No snippet)".to_string()),
            category: DEFAULT_CATEGORY.to_string(),
            done: false,
        }
    }

    /// Calendar event → task
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            id: format!("calendar-{}", event.id),
            source: TaskSource::Calendar,
            title: event
                .summary
                .clone()
                .unwrap_or_else(|| "No title".to_string()),
            description: event
                .description
                .clone()
                .unwrap_or_else(|| "(No description)".to_string()),
            category: DEFAULT_CATEGORY.to_string(),
            done: false,
        }
    }

    /// Manually entered task (UI-local, never crosses the bridge)
    pub fn manual(title: impl Into<String>) -> Self {
        Self {
            id: format!("manual-{}", uuid::Uuid::new_v4()),
            source: TaskSource::Manual,
            title: title.into(),
            description: "(No description)".to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            done: false,
        }
    }
}

/// Concatenate the current tasks into the summarize input: one
/// `"Task: {title}\nDesc: {description}\n"` block per task, blocks joined
/// by a blank line. Empty list yields the empty string.
pub fn summary_input(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|t| format!("Task: {}\nDesc: {}\n", t.title, t.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::gmail::{GmailHeader, GmailPayload};

    #[test]
    fn test_from_slack_full_message() {
        let message = SlackMessage {
            ts: "1712345678.000100".to_string(),
            user: Some("U01ABC".to_string()),
            text: Some("ship it".to_string()),
        };
        let task = Task::from_slack(&message);
        assert_eq!(task.id, "slack-1712345678.000100");
        assert_eq!(task.source, TaskSource::Slack);
        assert_eq!(task.title, "U01ABC");
        assert_eq!(task.description, "ship it");
        assert_eq!(task.category, "admin");
        assert!(!task.done);
    }

    #[test]
    fn test_from_slack_placeholders() {
        let message = SlackMessage {
            ts: "1.0".to_string(),
            user: None,
            text: None,
        };
        let task = Task::from_slack(&message);
        assert_eq!(task.title, "Slack message");
        assert_eq!(task.description, "(No text)");
    }

    #[test]
    fn test_from_email_with_from_header() {
        let message = GmailMessage {
            id: "m1".to_string(),
            snippet: Some("Lunch on Friday?".to_string()),
            payload: Some(GmailPayload {
                headers: vec![GmailHeader {
                    name: "From".to_string(),
                    value: "Ana <ana@example.com>".to_string(),
                }],
            }),
        };
        let task = Task::from_email(&message);
        assert_eq!(task.id, "gmail-m1");
        assert_eq!(task.source, TaskSource::Gmail);
        assert_eq!(task.title, "Email from Ana <ana@example.com>");
        assert_eq!(task.description, "Lunch on Friday?");
    }

    #[test]
    fn test_from_email_placeholders() {
        let message = GmailMessage {
            id: "m2".to_string(),
            snippet: None,
            payload: None,
        };
        let task = Task::from_email(&message);
        assert_eq!(task.title, "Email from unknown");
        assert_eq!(task.description, "(No snippet)");
    }

    #[test]
    fn test_from_event_minimal_record() {
        // {id:"e1", summary:"Standup"} maps to exactly this task
        let event = CalendarEvent {
            id: "e1".to_string(),
            summary: Some("Standup".to_string()),
            description: None,
            start: None,
        };
        let task = Task::from_event(&event);
        assert_eq!(task.id, "calendar-e1");
        assert_eq!(task.source, TaskSource::Calendar);
        assert_eq!(task.title, "Standup");
        assert_eq!(task.description, "(No description)");
        assert!(!task.done);
    }

    #[test]
    fn test_from_event_placeholders() {
        let event = CalendarEvent {
            id: "e2".to_string(),
            summary: None,
            description: None,
            start: None,
        };
        let task = Task::from_event(&event);
        assert_eq!(task.title, "No title");
    }

    #[test]
    fn test_manual_task_ids_are_unique() {
        let a = Task::manual("Buy milk");
        let b = Task::manual("Buy milk");
        assert_eq!(a.source, TaskSource::Manual);
        assert!(a.id.starts_with("manual-"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskSource::Calendar).unwrap(),
            "\"calendar\""
        );
    }

    #[test]
    fn test_summary_input_blocks() {
        let tasks = vec![
            Task::manual("Pay rent"),
            Task::from_event(&CalendarEvent {
                id: "e1".to_string(),
                summary: Some("Standup".to_string()),
                description: Some("daily".to_string()),
                start: None,
            }),
        ];
        let input = summary_input(&tasks);
        assert_eq!(
            input,
            "Task: Pay rent\nDesc: (No description)\n\nTask: Standup\nDesc: daily\n"
        );
    }

    #[test]
    fn test_summary_input_empty_list() {
        assert_eq!(summary_input(&[]), "");
    }
}
