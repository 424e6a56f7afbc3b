//! CLI commands.

mod generate;
mod inspect;
mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gw_session_id::SigningKey;

use crate::config::Config;
use crate::output::OutputFormat;

/// sidctl - Mint and check signed gateway session IDs.
#[derive(Debug, Parser)]
#[command(name = "sidctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Read the signing key from this file instead of the environment.
    #[arg(long, global = true, value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Mint new session IDs.
    Generate(generate::GenerateCommand),

    /// Check a session ID against the signing key.
    Validate(validate::ValidateCommand),

    /// Check the shape of a session ID without a key.
    Inspect(inspect::InspectCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: OutputFormat::parse(&self.format),
        };

        match self.command {
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Inspect(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("sidctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load the configured signing key. Only commands that sign or verify call this.
    pub fn signing_key(&self) -> Result<SigningKey> {
        Ok(self.config.require_signing_key()?)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::CommandFactory;

    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_count() {
        let cli = Cli::try_parse_from(["sidctl", "generate", "--count", "3"]).unwrap();
        match cli.command {
            Commands::Generate(cmd) => assert_eq!(cmd.count, 3),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(Cli::try_parse_from(["sidctl", "generate", "--count", "0"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sidctl",
            "validate",
            "abc",
            "--format",
            "json",
            "--key-file",
            "/tmp/key",
        ])
        .unwrap();
        assert_eq!(OutputFormat::parse(&cli.format), OutputFormat::Json);
        assert_eq!(cli.key_file, Some(PathBuf::from("/tmp/key")));
    }

    #[test]
    fn test_validate_requires_id() {
        assert!(Cli::try_parse_from(["sidctl", "validate"]).is_err());
    }

    fn config_with_missing_key_file() -> Config {
        Config::from_lookup(Some(Path::new("/nonexistent/sidctl-key")), |_| None)
    }

    #[test]
    fn test_keyless_commands_ignore_bad_key_source() {
        let keyless: [&[&str]; 2] = [&["sidctl", "inspect", "QUJD"], &["sidctl", "version"]];
        for args in keyless {
            let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
            assert!(cli.run(config_with_missing_key_file()).is_ok());
        }

        let empty_inline = Config::from_lookup(None, |name| {
            (name == crate::config::SIGNING_KEY_ENV).then(String::new)
        });
        let cli = Cli::try_parse_from(["sidctl", "inspect", "QUJD"]).unwrap();
        assert!(cli.run(empty_inline).is_ok());
    }

    #[test]
    fn test_signing_commands_report_bad_key_source() {
        let cli = Cli::try_parse_from(["sidctl", "generate"]).unwrap();
        let err = cli.run(config_with_missing_key_file()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::KeyFile { .. })
        ));
    }
}
