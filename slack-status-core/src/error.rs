//! Error types for slack-status-cli

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for status operations
#[derive(Error, Debug)]
pub enum SlackStatusError {
    /// No API token in the environment
    #[error("Slack token not provided. Set the SLACK_TOKEN environment variable.")]
    MissingToken,

    /// A preset name that is not defined in the configuration file
    #[error("Unknown preset {0}")]
    UnknownPreset(String),

    /// Duration string does not follow the `<N>d<N>h<N>m` layout
    #[error("Invalid duration format: '{0}' (expected e.g. 1d2h30m, each segment optional)")]
    InvalidDurationFormat(String),

    /// Slack answered with a non-200 status or `"ok": false`
    #[error("Failed due to an API error at {method}: {reason}")]
    Api { method: String, reason: String },

    /// Configuration file exists but could not be understood.
    ///
    /// Only ever logged by the loader; never returned to callers.
    #[error("Invalid configuration found at {}: {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    /// Transport-level HTTP failures (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for status operations
pub type Result<T> = std::result::Result<T, SlackStatusError>;

impl From<serde_json::Error> for SlackStatusError {
    fn from(err: serde_json::Error) -> Self {
        SlackStatusError::Serialization(err.to_string())
    }
}

impl SlackStatusError {
    /// Build an API error for the given Slack method.
    pub fn api(method: impl Into<String>, reason: impl Into<String>) -> Self {
        SlackStatusError::Api {
            method: method.into(),
            reason: reason.into(),
        }
    }
}
