//! Configuration file loading
//!
//! The configuration file is optional JSON holding named presets and
//! defaults:
//!
//! ```json
//! {
//!   "presets": {"focus": {"text": "Focusing", "icon": ":headphones:"}},
//!   "defaults": {"icon": ":speech_balloon:", "duration": "1h"}
//! }
//! ```
//!
//! Loading never fails. A missing file is an empty configuration, and a file
//! that cannot be read or parsed is reported with a warning and treated the
//! same way.

mod paths;

pub use paths::{default_config_path, CONFIG_FILE_NAME, CONFIG_PATH_ENV};

use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Result, SlackStatusError};
use crate::types::Configuration;

/// Load the configuration at `path`, degrading to an empty one on any problem.
pub fn load_configuration(path: &Path) -> Configuration {
    if !path.exists() {
        debug!("No configuration file at {}", path.display());
        return Configuration::default();
    }

    match read_configuration(path) {
        Ok(configuration) => {
            if configuration.is_empty() {
                debug!("No presets or defaults in {}", path.display());
            } else {
                debug!("Loaded configuration: {:?}", configuration);
            }
            configuration
        }
        Err(e) => {
            warn!("{}", e);
            Configuration::default()
        }
    }
}

/// Read and parse the configuration at `path`.
///
/// Every failure is mapped to [`SlackStatusError::ConfigParse`].
fn read_configuration(path: &Path) -> Result<Configuration> {
    let parse_error = |reason: String| SlackStatusError::ConfigParse {
        path: path.to_path_buf(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
}
