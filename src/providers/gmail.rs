//! Gmail client (unread listing + full-message fetch).
//!
//! The listing endpoint returns only message ids; the full record comes from
//! a follow-up get per id, issued strictly one at a time in listing order.
//! The first failure aborts the remaining fetches and the whole operation —
//! no partial result crosses the bridge. That contract lives in
//! [`fetch_full_messages`], behind the [`MailApi`] seam so it can be
//! exercised without a network.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::providers::google::GoogleAuth;

const GMAIL_BASE: &str = "https://gmail.googleapis.com/gmail/v1/users/me";

/// Listing query: unread messages only
const UNREAD_QUERY: &str = "is:unread";

/// One full Gmail message record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmailMessage {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub payload: Option<GmailPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmailPayload {
    #[serde(default)]
    pub headers: Vec<GmailHeader>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmailHeader {
    pub name: String,
    pub value: String,
}

impl GmailMessage {
    /// Value of the From header, if the provider included one
    pub fn from_header(&self) -> Option<&str> {
        self.payload
            .as_ref()?
            .headers
            .iter()
            .find(|h| h.name == "From")
            .map(|h| h.value.as_str())
    }
}

/// Listing response: ids only, `messages` absent when nothing matches
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    messages: Vec<MessageRef>,
}

#[derive(Debug, Deserialize)]
struct MessageRef {
    id: String,
}

/// The two Gmail operations the backend uses. `GmailClient` is the live
/// implementation; tests substitute a stub.
#[async_trait]
pub trait MailApi {
    /// List ids of unread messages, up to `max`, provider order
    async fn list_unread(&self, max: u32) -> Result<Vec<String>>;
    /// Fetch one full message by id
    async fn fetch_message(&self, id: &str) -> Result<GmailMessage>;
}

/// Gmail API client over the shared Google auth context
pub struct GmailClient {
    auth: Arc<GoogleAuth>,
}

impl GmailClient {
    pub fn new(auth: Arc<GoogleAuth>) -> Self {
        Self { auth }
    }
}

#[async_trait]
impl MailApi for GmailClient {
    async fn list_unread(&self, max: u32) -> Result<Vec<String>> {
        let token = self.auth.access_token().await?;
        let response: ListResponse = self
            .auth
            .http()
            .get(format!("{}/messages", GMAIL_BASE))
            .bearer_auth(token)
            .query(&[("q", UNREAD_QUERY), ("maxResults", &max.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.messages.into_iter().map(|m| m.id).collect())
    }

    async fn fetch_message(&self, id: &str) -> Result<GmailMessage> {
        let token = self.auth.access_token().await?;
        let message: GmailMessage = self
            .auth
            .http()
            .get(format!("{}/messages/{}", GMAIL_BASE, id))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(message)
    }
}

/// List unread ids, then fetch each full message sequentially in listing
/// order. Aborts on the first failed fetch.
pub async fn fetch_full_messages(api: &dyn MailApi, max: u32) -> Result<Vec<GmailMessage>> {
    let ids = api.list_unread(max).await?;

    let mut messages = Vec::with_capacity(ids.len());
    for id in &ids {
        messages.push(api.fetch_message(id).await?);
    }

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BawiError;
    use std::sync::Mutex;

    #[test]
    fn test_parse_list_response() {
        let json = r#"{"messages": [{"id": "m1", "threadId": "t1"}, {"id": "m2", "threadId": "t2"}], "resultSizeEstimate": 2}"#;
        let response: ListResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<String> = response.messages.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn test_parse_list_response_empty() {
        // Gmail omits `messages` entirely when nothing is unread
        let json = r#"{"resultSizeEstimate": 0}"#;
        let response: ListResponse = serde_json::from_str(json).unwrap();
        assert!(response.messages.is_empty());
    }

    #[test]
    fn test_from_header() {
        let json = r#"{
            "id": "m1",
            "snippet": "Lunch on Friday?",
            "payload": {"headers": [
                {"name": "Subject", "value": "Lunch"},
                {"name": "From", "value": "Ana <ana@example.com>"}
            ]}
        }"#;
        let message: GmailMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.from_header(), Some("Ana <ana@example.com>"));
    }

    #[test]
    fn test_from_header_missing() {
        let json = r#"{"id": "m1"}"#;
        let message: GmailMessage = serde_json::from_str(json).unwrap();
        assert!(message.from_header().is_none());
        assert!(message.snippet.is_none());
    }

    /// Stub mail API: scripted ids, fails fetching a chosen id, counts calls
    struct StubMail {
        ids: Vec<String>,
        fail_on: Option<String>,
        fetched: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MailApi for StubMail {
        async fn list_unread(&self, max: u32) -> Result<Vec<String>> {
            Ok(self.ids.iter().take(max as usize).cloned().collect())
        }

        async fn fetch_message(&self, id: &str) -> Result<GmailMessage> {
            self.fetched.lock().unwrap().push(id.to_string());
            if self.fail_on.as_deref() == Some(id) {
                return Err(BawiError::provider("Gmail", format!("get {} failed", id)));
            }
            Ok(GmailMessage {
                id: id.to_string(),
                snippet: Some(format!("snippet {}", id)),
                payload: None,
            })
        }
    }

    #[tokio::test]
    async fn test_fetch_full_messages_preserves_listing_order() {
        let stub = StubMail {
            ids: vec!["a".into(), "b".into(), "c".into()],
            fail_on: None,
            fetched: Mutex::new(Vec::new()),
        };

        let messages = fetch_full_messages(&stub, 5).await.unwrap();
        let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(*stub.fetched.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_fetch_full_messages_aborts_on_first_failure() {
        let stub = StubMail {
            ids: vec!["a".into(), "b".into(), "c".into()],
            fail_on: Some("b".into()),
            fetched: Mutex::new(Vec::new()),
        };

        let err = fetch_full_messages(&stub, 5).await.unwrap_err();
        assert!(err.to_string().contains("get b failed"));
        // The third id is never attempted
        assert_eq!(*stub.fetched.lock().unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_fetch_full_messages_respects_page_size() {
        let stub = StubMail {
            ids: (0..10).map(|i| format!("m{}", i)).collect(),
            fail_on: None,
            fetched: Mutex::new(Vec::new()),
        };

        let messages = fetch_full_messages(&stub, 5).await.unwrap();
        assert_eq!(messages.len(), 5);
    }
}
