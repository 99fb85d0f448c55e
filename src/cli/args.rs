//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Inspect and edit the simmer options record.
#[derive(Debug, Parser)]
#[command(name = "simmer-options")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a settings file (merged over ~/.simmer/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the option store (overrides settings and environment)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print command data
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the identifier of the options record
    Slug,

    /// Show the whole options record
    Show(ShowArgs),

    /// Print a single option
    Get(GetArgs),

    /// Set a single option, merging it into the record
    Set(SetArgs),

    /// Merge a JSON object into the record
    Merge(MergeArgs),

    /// Create the record if it has no content yet
    Add(AddArgs),

    /// Remove a single option
    Unset(UnsetArgs),

    /// Delete the whole record
    Reset(ResetArgs),

    /// Show resolved settings
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    /// Option key
    pub key: String,

    /// Print the value as JSON even when it is a string
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetArgs {
    /// Option key
    pub key: String,

    /// Value, parsed as JSON when possible and stored as a string otherwise
    pub value: String,

    /// Always store the value as a string
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `merge` command.
#[derive(Debug, Clone, clap::Args)]
pub struct MergeArgs {
    /// JSON object whose keys are merged into the record
    pub json: String,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// JSON object used as the initial record
    pub json: String,

    /// Ask the host to load the record eagerly
    #[arg(long)]
    pub autoload: bool,
}

/// Arguments for the `unset` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UnsetArgs {
    /// Option key
    pub key: String,
}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResetArgs {
    /// Don't prompt for confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_set_with_global_flags() {
        let cli = Cli::parse_from([
            "simmer-options",
            "--store",
            "/tmp/o.json",
            "set",
            "units",
            "metric",
            "--quiet",
        ]);

        assert_eq!(cli.store, Some(PathBuf::from("/tmp/o.json")));
        assert!(cli.quiet);
        match cli.command {
            Commands::Set(args) => {
                assert_eq!(args.key, "units");
                assert_eq!(args.value, "metric");
                assert!(!args.raw);
            }
            other => panic!("Expected Set, got {:?}", other),
        }
    }

    #[test]
    fn parses_add_autoload() {
        let cli = Cli::parse_from(["simmer-options", "add", "{}", "--autoload"]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.json, "{}");
                assert!(args.autoload);
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn parses_reset_force() {
        let cli = Cli::parse_from(["simmer-options", "reset", "-f"]);
        assert!(matches!(cli.command, Commands::Reset(ResetArgs { force: true })));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["simmer-options"]).is_err());
    }
}
