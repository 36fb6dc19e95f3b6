//! Logging setup
//!
//! The subscriber is built here and installed as the default for the
//! calling thread only, for as long as the returned guard lives.

use std::io::IsTerminal;
use tracing::subscriber::DefaultGuard;
use tracing::{debug, error, Subscriber};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Build the CLI subscriber: bare messages on stderr.
///
/// `RUST_LOG` wins when set; otherwise `debug` enables debug output from
/// this tool's own crates.
pub fn build_subscriber(debug: bool) -> impl Subscriber + Send + Sync {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn,slack_status_cli=debug,slack_status_core=debug")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .without_time()
            .with_target(false)
            .with_level(false),
    )
}

/// Install the CLI subscriber for the current thread.
pub fn init(debug: bool) -> DefaultGuard {
    tracing::subscriber::set_default(build_subscriber(debug))
}

/// Log a failed run: one error line, full details at debug level.
pub fn report_failure(err: &anyhow::Error) {
    error!("{}", crate::format::format_failure(err));
    debug!("Error details: {:?}", err);
}
