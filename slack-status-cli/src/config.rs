//! Runtime settings
//!
//! Collects everything the CLI reads from the process environment.

use anyhow::Result;
use slack_status_core::{
    default_config_path, load_configuration, Configuration, SlackStatusError, CONFIG_PATH_ENV,
};
use std::path::PathBuf;

/// Environment variable holding the Slack API token.
pub const TOKEN_ENV: &str = "SLACK_TOKEN";

/// Environment variable enabling debug logging.
pub const DEBUG_ENV: &str = "DEBUG";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "SLACK_STATUS_TIMEOUT";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings resolved from the environment for a single run
#[derive(Clone, PartialEq)]
pub struct RuntimeSettings {
    /// Slack API token, if provided
    pub token: Option<String>,

    /// Enable debug logging
    pub debug: bool,

    /// Configuration file location
    pub config_path: PathBuf,

    /// Request timeout in seconds
    pub timeout: u64,
}

// Keep the token out of debug logs.
impl std::fmt::Debug for RuntimeSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeSettings")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("debug", &self.debug)
            .field("config_path", &self.config_path)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            token: None,
            debug: false,
            config_path: default_config_path(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RuntimeSettings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults
    ///
    /// Invalid values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config_path = lookup(CONFIG_PATH_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.config_path);

        let timeout = lookup(TIMEOUT_ENV)
            .and_then(|timeout| timeout.trim().parse().ok())
            .filter(|timeout| Self::validate_timeout(*timeout).is_ok())
            .unwrap_or(defaults.timeout);

        Self {
            token: lookup(TOKEN_ENV),
            debug: lookup(DEBUG_ENV).is_some_and(|value| is_truthy(&value)),
            config_path,
            timeout,
        }
    }

    /// Return the token, failing if it is absent or empty
    pub fn require_token(&self) -> Result<&str, SlackStatusError> {
        match self.token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(SlackStatusError::MissingToken),
        }
    }

    /// Load the configuration file these settings point at
    pub fn load_configuration(&self) -> Configuration {
        load_configuration(&self.config_path)
    }

    /// Validate timeout value
    fn validate_timeout(timeout: u64) -> Result<()> {
        if timeout == 0 {
            return Err(anyhow::anyhow!("Timeout must be greater than 0"));
        }

        if timeout > 300 {
            return Err(anyhow::anyhow!(
                "Timeout must be less than or equal to 300 seconds"
            ));
        }

        Ok(())
    }
}

/// Any non-empty value turns a flag on, except `0` and `false`.
fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}
