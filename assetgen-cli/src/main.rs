//! assetgen - Materialize the pattern background fixture.
//!
//! Decodes the embedded image payload and writes it to
//! `assets/images/pattern_background.png`, creating directories as needed.
//!
//! # Commands
//!
//! - `assetgen` / `assetgen write` - Write the asset (replacing any existing file)
//! - `assetgen check` - Exit non-zero if the asset is missing or out of date
//!
//! # Usage
//!
//! ```bash
//! # Write the asset under the current directory
//! assetgen
//!
//! # Verify it from a build step
//! assetgen check --quiet
//!
//! # Write somewhere else and get a JSON report
//! assetgen -C ./web --output static/bg.png --format json
//! ```

use assetgen_cli::commands::{self, CheckOptions, OutputFormat, WriteOptions};
use assetgen_cli::{AssetConfig, CliError, logging, output};
use clap::{Parser, Subcommand};

/// assetgen - Materialize the pattern background fixture
#[derive(Parser)]
#[command(name = "assetgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory the output path is resolved against
    #[arg(long, short = 'C', global = true)]
    root: Option<String>,

    /// Output path relative to the root directory
    #[arg(long, short, global = true)]
    output: Option<String>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress status messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Show diagnostic logging (repeat for more detail)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Write the embedded asset to disk (default)
    Write,

    /// Check that the asset on disk matches the embedded payload
    Check,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = AssetConfig::from_overrides(cli.root, cli.output)?;

    match cli.command.unwrap_or(Commands::Write) {
        Commands::Write => {
            let options = WriteOptions {
                config,
                format: cli.format,
            };
            commands::run_write(options).map(|_| ())
        }
        Commands::Check => {
            let options = CheckOptions {
                config,
                format: cli.format,
            };
            commands::run_check(options).map(|_| ())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);
    output::set_verbosity(cli.verbose);
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        output::error(&e.format_for_cli());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_defaults_to_write() {
        let cli = Cli::try_parse_from(["assetgen"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.root.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["assetgen", "check", "-C", "web", "--format", "json", "-vv"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert_eq!(cli.root.as_deref(), Some("web"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["assetgen", "--format", "yaml"]).is_err());
    }
}
