//! slack-status-cli
//!
//! Set your Slack status from the command line.
//!
//! With custom text:
//!
//! ```text
//! SLACK_TOKEN=xoxp-... slack-status-cli set --text <text> --icon <icon> --duration <duration>
//! ```
//!
//! With a preset from `~/.config/slack-status-cli`:
//!
//! ```text
//! SLACK_TOKEN=xoxp-... slack-status-cli set --preset <preset-name> --duration <duration>
//! ```

use slack_status_cli::cli::{run, Cli};
use slack_status_cli::config::RuntimeSettings;
use slack_status_cli::logging;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let settings = RuntimeSettings::from_env();

    let _log_guard = logging::init(settings.debug);
    debug!("Settings: {:?}", settings);

    // Presets must be known before parsing, since --preset is checked against them
    let configuration = settings.load_configuration();
    let cli = Cli::parse_with_presets(configuration.preset_names());

    if let Err(e) = run(cli, &configuration, &settings).await {
        logging::report_failure(&e);
        std::process::exit(1);
    }
}
