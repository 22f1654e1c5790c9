//! Command-line interface definitions.
//!
//! Defines the CLI structure for the salesboard application using `clap`.
//! Without a subcommand the interactive operator console starts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sales leaderboard bot for a GroupMe group
#[derive(Parser, Debug)]
#[command(name = "salesboard")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity (debug logs)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the salesboard CLI.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive console accepting `fetch`, `listen`, and `exit`
    Console,

    /// Fetch recent messages once, answer recent commands, and publish the leaderboard
    Fetch,

    /// Poll for new messages and answer commands until interrupted
    Listen,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `salesboard check`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CheckCommand {
    /// Validate the configuration file and environment.
    Config,
}
