//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Idempotent installer recipes for bioinformatics tools.
#[derive(Debug, Parser)]
#[command(name = "biorecipe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .biorecipe/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
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

/// Which host to provision and how to reach it.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// Remote host (overrides host.address from config)
    #[arg(short = 'H', long, global = true, env = "BIORECIPE_HOST")]
    pub host: Option<String>,

    /// SSH login user
    #[arg(short, long, global = true, env = "BIORECIPE_USER")]
    pub user: Option<String>,

    /// SSH port
    #[arg(short, long, global = true, env = "BIORECIPE_PORT")]
    pub port: Option<u16>,

    /// SSH private key
    #[arg(short, long, global = true)]
    pub identity: Option<PathBuf>,

    /// Provision this machine instead of a remote host
    #[arg(long, global = true, conflicts_with = "host")]
    pub local: bool,

    /// Never use sudo for privileged steps
    #[arg(long, global = true)]
    pub no_sudo: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available recipes
    List(ListArgs),

    /// Report which recipes are already installed on the target
    Check(CheckArgs),

    /// Install recipes that are not yet present
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Recipes to check (all when omitted)
    pub recipes: Vec<String>,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Recipes to install, in order
    pub recipes: Vec<String>,

    /// Install every known recipe
    #[arg(long, conflicts_with = "recipes")]
    pub all: bool,

    /// Print the commands that would run without executing them
    #[arg(long)]
    pub dry_run: bool,
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
    fn install_accepts_names_and_global_flags() {
        let cli = Cli::parse_from([
            "biorecipe",
            "install",
            "emboss",
            "pgdspider",
            "--host",
            "bio-1",
            "--no-sudo",
            "--dry-run",
        ]);
        assert_eq!(cli.target.host.as_deref(), Some("bio-1"));
        assert!(cli.target.no_sudo);
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.recipes, vec!["emboss", "pgdspider"]);
                assert!(args.dry_run);
                assert!(!args.all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn all_conflicts_with_names() {
        let result = Cli::try_parse_from(["biorecipe", "install", "--all", "emboss"]);
        assert!(result.is_err());
    }

    #[test]
    fn local_conflicts_with_host() {
        let result = Cli::try_parse_from(["biorecipe", "check", "--local", "--host", "bio-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_json_flag() {
        let cli = Cli::parse_from(["biorecipe", "list", "--json"]);
        assert!(matches!(cli.command, Commands::List(ListArgs { json: true })));
    }
}
