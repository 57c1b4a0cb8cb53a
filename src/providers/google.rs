//! Shared Google OAuth2 context.
//!
//! Gmail and Calendar authenticate through one `GoogleAuth`, owned by the
//! backend and handed to both clients as `Arc<GoogleAuth>` — the sharing is
//! an explicit dependency, not a scoping accident. The pre-obtained refresh
//! token is exchanged for a short-lived access token, cached until close to
//! expiry. No authorization flow is implemented here.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::GoogleCredentials;
use crate::error::{BawiError, Result};

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Refresh slightly early so in-flight requests don't race expiry
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// OAuth2 refresh-token context shared by the Gmail and Calendar clients
pub struct GoogleAuth {
    http: reqwest::Client,
    credentials: GoogleCredentials,
    cached: Mutex<Option<CachedToken>>,
}

impl GoogleAuth {
    pub fn new(credentials: GoogleCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            cached: Mutex::new(None),
        }
    }

    /// HTTP client shared with the API clients built on this context
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Current access token, refreshed through the token endpoint when the
    /// cached one is absent or within a minute of expiring
    pub async fn access_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > Utc::now() + Duration::seconds(EXPIRY_MARGIN_SECS) {
                return Ok(token.access_token.clone());
            }
        }

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("refresh_token", self.credentials.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BawiError::provider(
                "Google",
                format!("token refresh failed ({}): {}", status, body),
            ));
        }

        let token: TokenResponse = response.json().await?;
        let entry = CachedToken {
            access_token: token.access_token.clone(),
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
        };
        *cached = Some(entry);

        Ok(token.access_token)
    }
}
