//! Slack Web API models
//!
//! Request and response models for the two Slack methods this tool calls.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::StatusUpdate;

/// Base URL of the Slack Web API.
pub const SLACK_API_BASE: &str = "https://slack.com/api";

/// Method that sets the user's profile status.
pub const USERS_PROFILE_SET: &str = "users.profile.set";

/// Method that snoozes notifications.
pub const DND_SET_SNOOZE: &str = "dnd.setSnooze";

/// Status fields of a Slack user profile.
///
/// Sent JSON-encoded in the `profile` form field of `users.profile.set`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStatus {
    pub status_text: String,
    pub status_emoji: String,
    pub status_expiration: i64,
}

impl From<&StatusUpdate> for ProfileStatus {
    fn from(update: &StatusUpdate) -> Self {
        Self {
            status_text: update.text.clone(),
            status_emoji: update.icon.clone().unwrap_or_default(),
            status_expiration: update.expiration,
        }
    }
}

impl ProfileStatus {
    /// Form fields for a `users.profile.set` request.
    pub fn to_form(&self) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![("profile", serde_json::to_string(self)?)])
    }
}

/// Form body for `dnd.setSnooze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnoozeRequest {
    pub num_minutes: u32,
}

/// Common envelope of every Slack Web API response.
///
/// A missing `ok` counts as failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlackResponse {
    #[serde(default)]
    pub ok: bool,
    /// Error code, present when `ok` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Non-fatal warning code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl SlackResponse {
    /// Create a successful response
    pub fn success() -> Self {
        Self {
            ok: true,
            ..Self::default()
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            warning: None,
        }
    }
}
