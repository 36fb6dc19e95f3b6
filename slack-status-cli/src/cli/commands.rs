//! CLI command and subcommand definitions

use clap::builder::PossibleValuesParser;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};

/// Slack status CLI
#[derive(Parser, Debug)]
#[command(name = "slack-status-cli")]
#[command(version, about = "Set your Slack status from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set your Slack status
    Set(SetArgs),
}

/// Arguments of the `set` command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SetArgs {
    /// Status text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Status icon (as defined by your workspace) in :icon: format
    #[arg(short, long)]
    pub icon: Option<String>,

    /// Status duration, formatted as AdBhCm (each segment is optional)
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Preset to use, as named in the configuration file
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Silences notifications for a few minutes
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Build the command, restricting `--preset` to the known preset names.
    ///
    /// With no presets the restriction is skipped and the value is checked
    /// when the command runs.
    pub fn command_with_presets<'a>(presets: impl IntoIterator<Item = &'a str>) -> clap::Command {
        let names: Vec<String> = presets.into_iter().map(str::to_string).collect();
        let command = Self::command();

        if names.is_empty() {
            return command;
        }

        command.mut_subcommand("set", |set| {
            set.mut_arg("preset", |arg| arg.value_parser(PossibleValuesParser::new(names)))
        })
    }

    /// Parse the process arguments, exiting with a usage error on failure.
    pub fn parse_with_presets<'a>(presets: impl IntoIterator<Item = &'a str>) -> Self {
        let matches = Self::command_with_presets(presets).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args`, returning usage errors instead of exiting.
    pub fn try_parse_from_with_presets<'a, I, T>(
        presets: impl IntoIterator<Item = &'a str>,
        args: I,
    ) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_with_presets(presets).try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(presets: &[&str], args: &[&str]) -> Result<SetArgs, clap::Error> {
        let argv = std::iter::once("slack-status-cli").chain(args.iter().copied());
        let cli = Cli::try_parse_from_with_presets(presets.iter().copied(), argv)?;
        match cli.command {
            Commands::Set(args) => Ok(args),
        }
    }

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
        Cli::command_with_presets(["focus", "lunch"]).debug_assert();
    }

    #[test]
    fn test_set_all_flags() {
        let args = parse(
            &[],
            &[
                "set", "--text", "Lunch", "--icon", ":taco:", "--duration", "1h", "--quiet",
            ],
        )
        .unwrap();

        assert_eq!(
            args,
            SetArgs {
                text: Some("Lunch".to_string()),
                icon: Some(":taco:".to_string()),
                duration: Some("1h".to_string()),
                preset: None,
                quiet: true,
            }
        );
    }

    #[test]
    fn test_set_without_flags() {
        assert_eq!(parse(&[], &["set"]).unwrap(), SetArgs::default());
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["focus"], &["set", "-p", "focus", "-d", "30m", "-q"]).unwrap();
        assert_eq!(args.preset.as_deref(), Some("focus"));
        assert_eq!(args.duration.as_deref(), Some("30m"));
        assert!(args.quiet);
    }

    #[test]
    fn test_known_preset_accepted() {
        let args = parse(&["focus", "lunch"], &["set", "--preset", "lunch"]).unwrap();
        assert_eq!(args.preset.as_deref(), Some("lunch"));
    }

    #[test]
    fn test_unknown_preset_is_usage_error() {
        let err = parse(&["focus", "lunch"], &["set", "--preset", "nap"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_preset_unchecked_without_presets() {
        let args = parse(&[], &["set", "--preset", "nap"]).unwrap();
        assert_eq!(args.preset.as_deref(), Some("nap"));
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(
            parse(&[], &["set", "--colour", "red"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&[], &["clear"]).unwrap_err().kind(),
            ErrorKind::InvalidSubcommand
        );
        assert!(parse(&[], &[]).is_err());
    }
}
