//! Notification sinks.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::SlackCredentials;

/// Default Slack Web API base URL.
const DEFAULT_API_BASE: &str = "https://slack.com/api";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to reach the notification service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid Slack token")]
    InvalidToken,

    #[error("notification service returned HTTP {0}")]
    Status(u16),

    #[error("notification service rejected the message: {0}")]
    Rejected(String),
}

/// Delivers a release announcement somewhere.
pub trait NotificationSink {
    /// Send `text` announcing `version`.
    fn send(&self, version: &str, text: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Posts announcements to a Slack channel via `chat.postMessage`.
pub struct SlackSink {
    client: Client,
    channel: String,
    api_base: String,
}

impl SlackSink {
    pub fn new(credentials: &SlackCredentials) -> Result<Self, NotifyError> {
        Self::with_api_base(credentials, DEFAULT_API_BASE)
    }

    /// Create a sink against a custom API base (used for testing).
    pub fn with_api_base(
        credentials: &SlackCredentials,
        api_base: &str,
    ) -> Result<Self, NotifyError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", credentials.token))
            .map_err(|_| NotifyError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("relwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            channel: credentials.channel.clone(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl NotificationSink for SlackSink {
    fn send(&self, version: &str, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/chat.postMessage", self.api_base);
        debug!("posting release {} to {}", version, self.channel);

        let response = self
            .client
            .post(&url)
            .json(&PostMessage { channel: &self.channel, text })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        let body: SlackResponse = response.json()?;
        if body.ok {
            Ok(())
        } else {
            Err(NotifyError::Rejected(body.error.unwrap_or_else(|| "unknown error".to_string())))
        }
    }
}
