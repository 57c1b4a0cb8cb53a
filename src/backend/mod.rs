//! Privileged backend: owns every credential and provider client.
//!
//! Clients are constructed once from the credentials captured at process
//! start; a missing credential leaves its client `None` and the matching
//! operation rejects immediately with a not-configured error, before any
//! network activity. Provider failures are logged here with full detail —
//! the caller only gets the reduced message string.

use std::sync::Arc;

use serde::Serialize;

use crate::config::Credentials;
use crate::error::{BawiError, Result};
use crate::providers::calendar::{CalendarClient, CalendarEvent};
use crate::providers::gmail::{self, GmailClient, GmailMessage};
use crate::providers::google::GoogleAuth;
use crate::providers::openai::OpenAiClient;
use crate::providers::slack::{SlackClient, SlackMessage};
use crate::providers::PAGE_SIZE;

/// Backend operations object. One per process, living on the backend thread.
pub struct Backend {
    slack: Option<SlackClient>,
    gmail: Option<GmailClient>,
    calendar: Option<CalendarClient>,
    openai: Option<OpenAiClient>,
}

impl Backend {
    /// Build each provider client from the credentials present. Gmail and
    /// Calendar share one auth context; each absent credential disables
    /// exactly its own operation(s).
    pub fn new(credentials: &Credentials) -> Self {
        let google = credentials
            .google
            .as_ref()
            .map(|g| Arc::new(GoogleAuth::new(g.clone())));

        Self {
            slack: credentials
                .slack_token
                .as_ref()
                .map(|t| SlackClient::new(t.clone())),
            gmail: google.clone().map(GmailClient::new),
            calendar: google.map(CalendarClient::new),
            openai: credentials
                .openai_api_key
                .as_ref()
                .map(|k| OpenAiClient::new(k.clone())),
        }
    }

    /// Which providers are usable (slack, gmail/calendar, openai)
    pub fn configured(&self) -> (bool, bool, bool) {
        (
            self.slack.is_some(),
            self.gmail.is_some(),
            self.openai.is_some(),
        )
    }

    /// Fetch the most recent messages from a Slack channel
    pub async fn fetch_messages(&self, channel_id: &str) -> Result<Vec<SlackMessage>> {
        let slack = self.slack.as_ref().ok_or_else(|| {
            BawiError::not_configured("Slack client not configured. Check SLACK_TOKEN.")
        })?;

        slack
            .recent_messages(channel_id, PAGE_SIZE)
            .await
            .inspect_err(|e| tracing::error!(channel_id, error = %e, "Slack fetch failed"))
    }

    /// Fetch unread emails: list ids, then full messages sequentially in
    /// listing order. The first failed full fetch aborts the whole operation.
    pub async fn fetch_emails(&self) -> Result<Vec<GmailMessage>> {
        let client = self.gmail.as_ref().ok_or_else(|| {
            BawiError::not_configured(
                "Gmail client not configured. Check GMAIL_CLIENT_ID, GMAIL_CLIENT_SECRET and GMAIL_REFRESH_TOKEN.",
            )
        })?;

        gmail::fetch_full_messages(client, PAGE_SIZE)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Gmail fetch failed"))
    }

    /// Fetch upcoming events from the primary calendar
    pub async fn fetch_calendar_events(&self) -> Result<Vec<CalendarEvent>> {
        let calendar = self.calendar.as_ref().ok_or_else(|| {
            BawiError::not_configured(
                "Calendar client not configured. Check GMAIL_CLIENT_ID, GMAIL_CLIENT_SECRET and GMAIL_REFRESH_TOKEN.",
            )
        })?;

        calendar
            .upcoming_events(PAGE_SIZE)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Calendar fetch failed"))
    }

    /// Summarize arbitrary text through the fixed prompt template
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let openai = self.openai.as_ref().ok_or_else(|| {
            BawiError::not_configured("OpenAI client not configured. Check OPENAI_API_KEY.")
        })?;

        openai
            .summarize(text)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "OpenAI summarize failed"))
    }

    /// Execute one bridge request, serializing the typed result into the
    /// opaque JSON payload that crosses the boundary.
    pub async fn dispatch(&self, request: crate::bridge::BridgeRequest) -> crate::bridge::BridgeResult {
        use crate::bridge::BridgeRequest;

        match request {
            BridgeRequest::FetchMessages { channel_id } => {
                to_payload(self.fetch_messages(&channel_id).await)
            }
            BridgeRequest::FetchEmails => to_payload(self.fetch_emails().await),
            BridgeRequest::FetchCalendarEvents => to_payload(self.fetch_calendar_events().await),
            BridgeRequest::Summarize { text } => to_payload(self.summarize(&text).await),
        }
    }
}

/// Reduce a typed operation result to the bridge wire shape:
/// JSON value on success, plain message string on failure (unmodified).
fn to_payload<T: Serialize>(result: Result<T>) -> crate::bridge::BridgeResult {
    match result {
        Ok(value) => serde_json::to_value(value).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    }
}
