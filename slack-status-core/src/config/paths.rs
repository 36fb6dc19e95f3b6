//! Default path resolution for the configuration file

use std::path::PathBuf;

/// File name of the configuration file (no extension).
pub const CONFIG_FILE_NAME: &str = "slack-status-cli";

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "SLACK_STATUS_CONFIG";

/// Returns the default path for the configuration file.
///
/// Always `~/.config/slack-status-cli`, on every platform. Falls back to a
/// relative `.config/slack-status-cli` if no home directory can be found.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_has_no_extension() {
        let path = default_config_path();
        assert_eq!(path.extension(), None);
        assert!(path.ends_with(".config/slack-status-cli"));
    }
}
