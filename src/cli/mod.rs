//! CLI module for priorauth
//!
//! Provides the command-line interface using clap.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Priorauth - Track prior authorization prerequisites and check their consistency
#[derive(Parser, Debug)]
#[command(name = "priorauth")]
#[command(version)]
#[command(about = "Track prior authorization prerequisites and check their consistency")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Record information requests instead of sending them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Path to a config file (defaults to ./priorauth.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tracked items
    Items {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the dependency rules
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a set of completed items
    Check {
        /// Item marked done (repeatable)
        #[arg(long = "done", value_name = "ID")]
        done: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an interactive session reading commands from stdin
    Session,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_with_repeated_done() {
        let cli = Cli::try_parse_from([
            "priorauth", "check", "--done", "consent", "--done", "demographics", "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Check { done, json }) => {
                assert_eq!(done, vec!["consent", "demographics"]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["priorauth", "session", "--dry-run", "-v"]).unwrap();
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Session)));
    }

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["priorauth"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
