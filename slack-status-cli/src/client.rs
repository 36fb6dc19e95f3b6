//! HTTP client for the Slack Web API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use slack_status_core::api::{
    ProfileStatus, SlackResponse, SnoozeRequest, DND_SET_SNOOZE, SLACK_API_BASE,
    USERS_PROFILE_SET,
};
use slack_status_core::{SlackStatusError, StatusUpdate};
use std::time::Duration;
use tracing::debug;

/// Normalize a base URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// The Slack operations the `set` command needs.
///
/// This trait lets the command handler run against a fake in tests.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Set the user's status text, emoji and expiration.
    async fn update_status(&self, update: &StatusUpdate) -> Result<()>;

    /// Silence notifications for `minutes`.
    async fn snooze_notifications(&self, minutes: u32) -> Result<()>;
}

/// HTTP client for the Slack Web API.
///
/// Every request is a single form-encoded POST carrying an
/// `Authorization: Bearer <token>` header. Failures are final: there are
/// no retries.
///
/// # Examples
///
/// ```no_run
/// use slack_status_cli::client::{SlackApi, SlackClient};
/// use slack_status_core::StatusUpdate;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = SlackClient::new("xoxp-token", 10)?;
///
/// client
///     .update_status(&StatusUpdate {
///         text: "Lunch".to_string(),
///         icon: Some(":taco:".to_string()),
///         expiration: 0,
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SlackClient {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SlackClient {
    /// Create a client for the public Slack API.
    ///
    /// # Arguments
    ///
    /// * `token` - Slack API token sent as a bearer credential
    /// * `timeout_secs` - Request timeout in seconds
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(token: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        Self::with_base_url(token, SLACK_API_BASE, timeout_secs)
    }

    /// Create a client against another base URL, such as a local mock server.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("slack-status-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_url(base_url),
            token: token.into(),
        })
    }

    /// Check a Slack response for success.
    ///
    /// Anything but HTTP 200 with `"ok": true` in the body is an API error.
    async fn handle_response(response: Response, method: &str) -> Result<()> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SlackStatusError::Http(e.to_string()))
            .with_context(|| format!("Failed to read response body from {}", method))?;

        debug!("API response: {} {}", status, text);

        if status != StatusCode::OK {
            let reason = match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    format!("access denied (HTTP {})", status.as_u16())
                }
                StatusCode::TOO_MANY_REQUESTS => "rate limited (HTTP 429)".to_string(),
                _ => format!("HTTP {}", status.as_u16()),
            };
            return Err(SlackStatusError::api(method, reason).into());
        }

        let body: SlackResponse = serde_json::from_str(&text)
            .map_err(|e| SlackStatusError::api(method, format!("unreadable response ({})", e)))?;

        if let Some(warning) = &body.warning {
            debug!("API warning from {}: {}", method, warning);
        }

        if !body.ok {
            let reason = body.error.unwrap_or_else(|| "request was not ok".to_string());
            return Err(SlackStatusError::api(method, reason).into());
        }

        Ok(())
    }

    /// POST a form body to a Slack method.
    async fn post_form<T: Serialize + ?Sized + std::fmt::Debug>(
        &self,
        method: &str,
        form: &T,
    ) -> Result<()> {
        let url = format!("{}/{}", self.base_url, method);

        debug!("API request: {} {:?}", method, form);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .form(form)
            .send()
            .await
            .map_err(|e| SlackStatusError::Http(e.to_string()))
            .with_context(|| format!("Failed to send request to {}", method))?;

        Self::handle_response(response, method).await
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    /// Set the status through `users.profile.set`.
    ///
    /// Reference: <https://api.slack.com/methods/users.profile.set>
    async fn update_status(&self, update: &StatusUpdate) -> Result<()> {
        let form = ProfileStatus::from(update)
            .to_form()
            .context("Failed to encode profile")?;

        self.post_form(USERS_PROFILE_SET, &form).await
    }

    /// Snooze notifications through `dnd.setSnooze`.
    ///
    /// Reference: <https://api.slack.com/methods/dnd.setSnooze>
    async fn snooze_notifications(&self, minutes: u32) -> Result<()> {
        let form = SnoozeRequest {
            num_minutes: minutes,
        };

        self.post_form(DND_SET_SNOOZE, &form).await
    }
}
