//! Google Calendar client (upcoming events on the primary calendar).

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::providers::google::GoogleAuth;

const EVENTS_URL: &str = "https://www.googleapis.com/calendar/v3/calendars/primary/events";

/// One calendar event record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start: Option<EventTime>,
}

/// Event start/end. All-day events carry `date`, timed events `dateTime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    items: Vec<CalendarEvent>,
}

/// Calendar API client over the shared Google auth context
pub struct CalendarClient {
    auth: Arc<GoogleAuth>,
}

impl CalendarClient {
    pub fn new(auth: Arc<GoogleAuth>) -> Self {
        Self { auth }
    }

    /// List up to `max` upcoming events, recurring events expanded to single
    /// occurrences, ascending start time.
    pub async fn upcoming_events(&self, max: u32) -> Result<Vec<CalendarEvent>> {
        let token = self.auth.access_token().await?;
        let time_min = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let response: EventsResponse = self
            .auth
            .http()
            .get(EVENTS_URL)
            .bearer_auth(token)
            .query(&[
                ("timeMin", time_min.as_str()),
                ("maxResults", &max.to_string()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.items)
    }
}
