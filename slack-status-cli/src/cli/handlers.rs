//! Command execution handlers

use anyhow::Result;
use chrono::{DateTime, Utc};
use slack_status_core::{expiration_at, Configuration, Preset, SlackStatusError, StatusUpdate};
use tracing::debug;

use crate::client::{SlackApi, SlackClient};
use crate::config::RuntimeSettings;
use crate::format::format_status_set;

use super::commands::*;

/// Minutes notifications stay silenced when `--quiet` is given.
pub const QUIET_SNOOZE_MINUTES: u32 = 5;

/// Everything the `set` command will send, resolved from flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPlan {
    /// The status to send
    pub update: StatusUpdate,
    /// Whether to silence notifications afterwards
    pub quiet: bool,
}

/// Look up the preset named by `--preset`, if any.
pub fn lookup_preset<'a>(
    args: &SetArgs,
    configuration: &'a Configuration,
) -> Result<Option<&'a Preset>, SlackStatusError> {
    match args.preset.as_deref() {
        None => Ok(None),
        Some(name) => configuration
            .preset(name)
            .map(Some)
            .ok_or_else(|| SlackStatusError::UnknownPreset(name.to_string())),
    }
}

/// Merge flags, preset and defaults into a [`SetPlan`].
///
/// A selected preset replaces the text and icon flags outright. Defaults
/// fill whatever is still missing: the icon, and the duration when
/// `--duration` is absent. Empty strings count as missing.
pub fn resolve_set(
    args: &SetArgs,
    configuration: &Configuration,
    now: DateTime<Utc>,
) -> Result<SetPlan, SlackStatusError> {
    let preset = lookup_preset(args, configuration)?;
    let defaults = &configuration.defaults;

    let (text, icon) = match preset {
        Some(preset) => (Some(preset.text.clone()), preset.icon.clone()),
        None => (args.text.clone(), args.icon.clone()),
    };

    let icon = non_empty(icon).or_else(|| non_empty(defaults.icon.clone()));
    let duration = non_empty(args.duration.clone()).or_else(|| non_empty(defaults.duration.clone()));
    let expiration = expiration_at(duration.as_deref(), now)?;

    Ok(SetPlan {
        update: StatusUpdate {
            text: text.unwrap_or_default(),
            icon,
            expiration,
        },
        quiet: args.quiet || preset.is_some_and(|preset| preset.quiet),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Handle the `set` command against any [`SlackApi`].
///
/// The status update and the snooze are independent calls; a failed snooze
/// does not roll back the status.
pub async fn handle_set(
    api: &dyn SlackApi,
    args: &SetArgs,
    configuration: &Configuration,
) -> Result<SetPlan> {
    let plan = resolve_set(args, configuration, Utc::now())?;
    debug!("Resolved status: {:?}", plan);

    api.update_status(&plan.update).await?;

    if plan.quiet {
        api.snooze_notifications(QUIET_SNOOZE_MINUTES).await?;
    }

    println!("{}", format_status_set(&plan.update));

    Ok(plan)
}

/// Run a parsed command.
///
/// The preset is checked before the token so that a bad preset fails
/// without needing credentials, and no request is made until both pass.
pub async fn run(cli: Cli, configuration: &Configuration, settings: &RuntimeSettings) -> Result<()> {
    match cli.command {
        Commands::Set(args) => {
            lookup_preset(&args, configuration)?;
            let token = settings.require_token()?;
            let client = SlackClient::new(token, settings.timeout)?;

            handle_set(&client, &args, configuration).await.map(|_| ())
        }
    }
}
