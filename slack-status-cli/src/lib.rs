//! slack-status-cli Library
//!
//! This library provides the core functionality for the `slack-status-cli`
//! tool: set a Slack status (optionally from a named preset) and silence
//! notifications.
//!
//! # Public API
//!
//! The primary public API is the [`client::SlackClient`], an implementation
//! of the [`client::SlackApi`] trait. Runtime settings are available via
//! [`config::RuntimeSettings`].
//!
//! ```no_run
//! use slack_status_cli::client::{SlackApi, SlackClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = SlackClient::new("xoxp-token", 10)?;
//! client.snooze_notifications(5).await?;
//! # Ok(())
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for the Slack Web API.
pub mod client;

/// Runtime settings read from the environment.
pub mod config;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

/// Logging setup.
pub mod logging;

#[cfg(test)]
pub mod test_utils;
