//! Slack client (`conversations.history`).

use serde::{Deserialize, Serialize};

use crate::error::{BawiError, Result};

const HISTORY_URL: &str = "https://slack.com/api/conversations.history";

/// One Slack message, as returned by the provider.
/// `ts` doubles as the message's unique id within a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackMessage {
    pub ts: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Slack API response envelope. Slack reports failures in-band:
/// HTTP 200 with `ok: false` and an error code.
#[derive(Debug, Deserialize)]
struct HistoryResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    messages: Vec<SlackMessage>,
}

/// Slack Web API client (bearer token)
pub struct SlackClient {
    http: reqwest::Client,
    token: String,
}

impl SlackClient {
    pub fn new(token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
        }
    }

    /// Fetch the most recent `limit` messages from a channel,
    /// provider-default ordering (newest first).
    pub async fn recent_messages(&self, channel_id: &str, limit: u32) -> Result<Vec<SlackMessage>> {
        let response: HistoryResponse = self
            .http
            .get(HISTORY_URL)
            .bearer_auth(&self.token)
            .query(&[("channel", channel_id), ("limit", &limit.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.ok {
            let code = response.error.unwrap_or_else(|| "unknown_error".to_string());
            return Err(BawiError::provider("Slack", code));
        }

        Ok(response.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_history_response() {
        let json = r#"{
            "ok": true,
            "messages": [
                {"type": "message", "ts": "1712345678.000100", "user": "U01ABC", "text": "ship it"},
                {"type": "message", "ts": "1712345600.000200"}
            ]
        }"#;

        let response: HistoryResponse = serde_json::from_str(json).unwrap();
        assert!(response.ok);
        assert_eq!(response.messages.len(), 2);
        assert_eq!(response.messages[0].ts, "1712345678.000100");
        assert_eq!(response.messages[0].user.as_deref(), Some("U01ABC"));
        assert!(response.messages[1].user.is_none());
        assert!(response.messages[1].text.is_none());
    }

    #[test]
    fn test_parse_error_envelope() {
        let json = r#"{"ok": false, "error": "channel_not_found"}"#;
        let response: HistoryResponse = serde_json::from_str(json).unwrap();
        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("channel_not_found"));
        assert!(response.messages.is_empty());
    }
}
