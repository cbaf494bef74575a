//! Sweet Surprise CLI entry point.

mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build date, e.g. "0.1.0 (2026-08-28)".
const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SWEET_BUILD_DATE"), ")");

#[derive(Parser)]
#[command(
    name = "sweet-surprise",
    version,
    long_version = LONG_VERSION,
    about = "Terminal greeting card - a timed teddy-and-chocolate animation with a personalized message",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Start with sound muted
    #[arg(long)]
    muted: bool,

    /// Skip the full choreography (accessibility fallback)
    #[arg(long)]
    reduced_motion: bool,

    /// Theme name: romantic, classic, or mono
    #[arg(long)]
    theme: Option<String>,

    /// Prefill the recipient name
    #[arg(long)]
    name: Option<String>,

    /// Prefill the message
    #[arg(long)]
    message: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Print the config file path
    Path,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Some(Command::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sweet-surprise",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        None => commands::run::handle_run(commands::run::RunOptions {
            muted: cli.muted,
            reduced_motion: cli.reduced_motion,
            theme: cli.theme,
            name: cli.name,
            message: cli.message,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_without_arguments() {
        let cli = Cli::parse_from(["sweet-surprise"]);
        assert!(cli.command.is_none());
        assert!(!cli.muted);
        assert!(!cli.reduced_motion);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from([
            "sweet-surprise",
            "--muted",
            "--reduced-motion",
            "--theme",
            "classic",
            "--name",
            "Mia",
            "--message",
            "hi",
        ]);
        assert!(cli.muted);
        assert!(cli.reduced_motion);
        assert_eq!(cli.theme.as_deref(), Some("classic"));
        assert_eq!(cli.name.as_deref(), Some("Mia"));
        assert_eq!(cli.message.as_deref(), Some("hi"));
    }

    #[test]
    fn cli_parses_config_subcommands() {
        let cli = Cli::parse_from(["sweet-surprise", "config", "show"]);
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
