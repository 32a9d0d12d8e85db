//! Notification credentials read from the environment.

use super::loader::ConfigError;

pub const SLACK_TOKEN_VAR: &str = "SLACK_TOKEN";
pub const SLACK_CHANNEL_VAR: &str = "SLACK_CHANNEL";

/// Credentials for posting to a Slack channel.
#[derive(Clone, PartialEq, Eq)]
pub struct SlackCredentials {
    pub token: String,
    pub channel: String,
}

impl std::fmt::Debug for SlackCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackCredentials")
            .field("token", &"<redacted>")
            .field("channel", &self.channel)
            .finish()
    }
}

impl SlackCredentials {
    /// Read `SLACK_TOKEN` and `SLACK_CHANNEL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`, reporting every missing variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let token = get(SLACK_TOKEN_VAR);
        let channel = get(SLACK_CHANNEL_VAR);

        match (token, channel) {
            (Some(token), Some(channel)) => Ok(Self { token, channel }),
            (token, channel) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push(SLACK_TOKEN_VAR.to_string());
                }
                if channel.is_none() {
                    missing.push(SLACK_CHANNEL_VAR.to_string());
                }
                Err(ConfigError::MissingEnv(missing))
            }
        }
    }
}
