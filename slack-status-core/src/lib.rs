//! slack-status-cli Core Library
//!
//! Shared types, models, and utilities for setting a Slack status from the
//! command line. This crate holds everything that does not touch the network
//! or the terminal, and is used by the CLI crate.

pub mod api;
pub mod config;
pub mod duration;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{default_config_path, load_configuration, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
pub use duration::{expiration_at, expiration_from_now, NO_EXPIRATION};
pub use error::*;
pub use types::*;
