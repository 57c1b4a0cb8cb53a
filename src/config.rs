//! Credentials and settings.
//!
//! Credentials are read once from the environment at process start (a `.env`
//! file is loaded first via `dotenvy`). Every field is optional: a missing
//! credential disables exactly its own operation(s) and nothing else.
//! Non-secret preferences live in `~/.bawi/settings.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default Slack channel when neither env nor settings provide one
pub const DEFAULT_SLACK_CHANNEL: &str = "C123456";

/// Google OAuth2 credentials (refresh-token flow, pre-obtained).
/// Gmail and Calendar share this one context.
#[derive(Debug, Clone)]
pub struct GoogleCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// All provider credentials, captured at startup
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Slack bot token (`SLACK_TOKEN`, e.g. xoxb-...)
    pub slack_token: Option<String>,
    /// Google OAuth credentials (`GMAIL_CLIENT_ID` / `GMAIL_CLIENT_SECRET` /
    /// `GMAIL_REFRESH_TOKEN`); all three or nothing
    pub google: Option<GoogleCredentials>,
    /// OpenAI API key (`OPENAI_API_KEY`, e.g. sk-...)
    pub openai_api_key: Option<String>,
}

impl Credentials {
    /// Read credentials from the environment.
    ///
    /// Google credentials count as present only when all three variables are
    /// set; a partial set is treated as absent (no garbage calls with half a
    /// credential).
    pub fn from_env() -> Self {
        let google = match (
            env_var("GMAIL_CLIENT_ID"),
            env_var("GMAIL_CLIENT_SECRET"),
            env_var("GMAIL_REFRESH_TOKEN"),
        ) {
            (Some(client_id), Some(client_secret), Some(refresh_token)) => {
                Some(GoogleCredentials {
                    client_id,
                    client_secret,
                    refresh_token,
                })
            }
            _ => None,
        };

        Self {
            slack_token: env_var("SLACK_TOKEN"),
            google,
            openai_api_key: env_var("OPENAI_API_KEY"),
        }
    }
}

/// Non-empty env var lookup
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get the ~/.bawi directory path
pub fn bawi_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bawi")
}

/// User settings (non-secret)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Slack channel to fetch from
    #[serde(default)]
    pub slack_channel: Option<String>,
}

/// Settings file path
fn settings_path() -> PathBuf {
    bawi_dir().join("settings.toml")
}

/// Load settings (missing or unreadable file yields defaults)
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

/// Resolve the Slack channel id: env override, then settings, then default
pub fn slack_channel(settings: &Settings) -> String {
    env_var("SLACK_CHANNEL")
        .or_else(|| settings.slack_channel.clone())
        .unwrap_or_else(|| DEFAULT_SLACK_CHANNEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_credentials_are_all_absent() {
        let creds = Credentials::default();
        assert!(creds.slack_token.is_none());
        assert!(creds.google.is_none());
        assert!(creds.openai_api_key.is_none());
    }

    #[test]
    fn test_load_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = load_settings_from(&path);
        assert!(settings.slack_channel.is_none());
    }

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "slack_channel = \"C999\"").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.slack_channel.as_deref(), Some("C999"));
    }

    #[test]
    fn test_load_settings_invalid_toml_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not [ valid").unwrap();

        let settings = load_settings_from(&path);
        assert!(settings.slack_channel.is_none());
    }
}
