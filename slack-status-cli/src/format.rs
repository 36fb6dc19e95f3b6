//! Output formatting utilities for the CLI

use chrono::{DateTime, Local};
use colored::*;
use slack_status_core::{StatusUpdate, NO_EXPIRATION};

/// Layout of expiration times, e.g. `Friday, October 17, 14:30`.
pub const EXPIRATION_FORMAT: &str = "%A, %B %d, %H:%M";

/// Format the status as shown in Slack: icon (if any), then text
pub fn format_status(update: &StatusUpdate) -> String {
    match update.icon.as_deref() {
        Some(icon) if !icon.is_empty() => format!("{} {}", icon, update.text),
        _ => update.text.clone(),
    }
}

/// Format an expiration timestamp in local time
pub fn format_expiration(expiration: i64) -> String {
    if expiration == NO_EXPIRATION {
        return "(no expiration)".to_string();
    }

    match DateTime::from_timestamp(expiration, 0) {
        Some(at) => format!(
            "(expires {})",
            at.with_timezone(&Local).format(EXPIRATION_FORMAT)
        ),
        None => format!("(expires at {})", expiration),
    }
}

/// Format the confirmation printed after a successful update
pub fn format_status_set(update: &StatusUpdate) -> String {
    format!(
        "✨ Status set to '{}' {}",
        format_status(update).bold(),
        format_expiration(update.expiration).dimmed()
    )
}

/// Format the single line reported when a run fails
pub fn format_failure(error: &anyhow::Error) -> String {
    format!("🔥 Could not set status: {:#}", error)
}
