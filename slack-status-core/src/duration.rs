//! Duration descriptions to expiration timestamps
//!
//! A duration description has the form `<N>d<N>h<N>m`. Every segment is
//! optional, but segments that are present must appear in that order.

use chrono::{DateTime, TimeDelta, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, SlackStatusError};

/// Expiration value meaning "the status never expires".
pub const NO_EXPIRATION: i64 = 0;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<days>[0-9]+)d)?(?:(?P<hours>[0-9]+)h)?(?:(?P<minutes>[0-9]+)m)?$")
        .expect("duration pattern is valid")
});

/// Compute the expiration timestamp for `description`, starting from now.
///
/// See [`expiration_at`].
pub fn expiration_from_now(description: Option<&str>) -> Result<i64> {
    expiration_at(description, Utc::now())
}

/// Compute the expiration timestamp for `description`, starting from `now`.
///
/// Absent or empty descriptions yield [`NO_EXPIRATION`]. A description that
/// matches with every segment zero (e.g. `0d0h0m`) yields `now` itself.
///
/// # Errors
///
/// Returns [`SlackStatusError::InvalidDurationFormat`] if the description
/// does not match the pattern, or if the offset overflows.
pub fn expiration_at(description: Option<&str>, now: DateTime<Utc>) -> Result<i64> {
    let description = match description {
        Some(d) if !d.is_empty() => d,
        _ => return Ok(NO_EXPIRATION),
    };

    let invalid = || SlackStatusError::InvalidDurationFormat(description.to_string());

    let captures = DURATION_PATTERN.captures(description).ok_or_else(invalid)?;

    let segment = |name: &str| -> Result<i64> {
        match captures.name(name) {
            Some(m) => m.as_str().parse::<i64>().map_err(|_| invalid()),
            None => Ok(0),
        }
    };

    let days = TimeDelta::try_days(segment("days")?).ok_or_else(invalid)?;
    let hours = TimeDelta::try_hours(segment("hours")?).ok_or_else(invalid)?;
    let minutes = TimeDelta::try_minutes(segment("minutes")?).ok_or_else(invalid)?;

    let offset = days
        .checked_add(&hours)
        .and_then(|d| d.checked_add(&minutes))
        .ok_or_else(invalid)?;

    now.checked_add_signed(offset)
        .map(|at| at.timestamp())
        .ok_or_else(invalid)
}
