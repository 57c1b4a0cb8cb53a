//! Unified error type for Bawi.
//!
//! `thiserror`-based, with chained propagation from the HTTP and
//! serialization layers. Errors crossing the bridge are reduced to their
//! display string, so every message must stand on its own.

use std::io;
use thiserror::Error;

/// Bawi error type
#[derive(Debug, Error)]
pub enum BawiError {
    /// I/O error (log file, settings file, terminal)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required credential is missing; the operation stays disabled until
    /// restart with the credential present
    #[error("{0}")]
    NotConfigured(String),

    /// A live provider call failed (network, auth, quota)
    #[error("{provider} error: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error (settings file)
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Bridge channel error (backend thread gone)
    #[error("Bridge error: {0}")]
    Bridge(String),
}

/// Bawi Result type alias
pub type Result<T> = std::result::Result<T, BawiError>;

impl BawiError {
    /// Not-configured error; `msg` should name the env var(s) to set
    pub fn not_configured(msg: impl Into<String>) -> Self {
        Self::NotConfigured(msg.into())
    }

    /// Provider-call failure
    pub fn provider(provider: &'static str, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider,
            message: msg.into(),
        }
    }

    /// Bridge channel failure
    pub fn bridge(msg: impl Into<String>) -> Self {
        Self::Bridge(msg.into())
    }
}
