//! Core types for status presets and updates

use serde::Deserialize;
use std::collections::BTreeMap;

/// A named, reusable status defined in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Preset {
    /// Status text
    pub text: String,
    /// Status icon in `:icon:` format
    #[serde(default)]
    pub icon: Option<String>,
    /// Silence notifications whenever this preset is applied
    #[serde(default)]
    pub quiet: bool,
}

impl Preset {
    /// Create a preset with text and an optional icon.
    pub fn new(text: impl Into<String>, icon: Option<&str>) -> Self {
        Self {
            text: text.into(),
            icon: icon.map(str::to_string),
            quiet: false,
        }
    }
}

/// Fallback values used when the matching CLI flag is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Defaults {
    /// Icon applied when neither a flag nor a preset provides one
    #[serde(default)]
    pub icon: Option<String>,
    /// Duration applied when `--duration` is not given
    #[serde(default)]
    pub duration: Option<String>,
}

/// User configuration: named presets plus defaults.
///
/// Loaded once per run and never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Configuration {
    /// Preset name to preset definition mapping
    #[serde(default)]
    pub presets: BTreeMap<String, Preset>,
    /// Defaults for icon and duration
    #[serde(default)]
    pub defaults: Defaults,
}

impl Configuration {
    /// Get a preset by name.
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Get all preset names, sorted.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Check if no presets and no defaults are configured.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty() && self.defaults == Defaults::default()
    }
}

/// A fully resolved status, ready to send to Slack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Status text, possibly empty
    pub text: String,
    /// Status icon, if any resolved
    pub icon: Option<String>,
    /// Unix timestamp at which Slack clears the status; `0` means never
    pub expiration: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_empty() {
        let config = Configuration::default();
        assert!(config.presets.is_empty());
        assert_eq!(config.defaults, Defaults::default());
        assert!(config.is_empty());
    }

    #[test]
    fn test_preset_lookup_and_names() {
        let mut config = Configuration::default();
        config
            .presets
            .insert("lunch".to_string(), Preset::new("Lunch", Some(":taco:")));
        config
            .presets
            .insert("focus".to_string(), Preset::new("Focusing", None));

        assert_eq!(config.preset("focus").unwrap().text, "Focusing");
        assert!(config.preset("meeting").is_none());
        assert_eq!(config.preset_names().collect::<Vec<_>>(), ["focus", "lunch"]);
        assert!(!config.is_empty());
    }

    #[test]
    fn test_preset_deserialization_defaults() {
        let preset: Preset = serde_json::from_str(r#"{"text": "Away"}"#).unwrap();
        assert_eq!(preset.text, "Away");
        assert_eq!(preset.icon, None);
        assert!(!preset.quiet);

        let missing_text = serde_json::from_str::<Preset>(r#"{"icon": ":wave:"}"#);
        assert!(missing_text.is_err());
    }
}
