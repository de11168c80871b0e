//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! repartee binary.

use clap::{Args, Parser, Subcommand};

/// Compare Clever rosters across apps.
#[derive(Parser, Debug)]
#[command(
    name = "repartee",
    about = "repartee - Tool for interacting with the Clever API",
    disable_version_flag = true
)]
pub struct Cli {
    /// Subcommand to run; without one the available commands are listed.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare a district's roster via two different Clever apps.
    Diff(DiffArgs),

    /// Show the version of this binary.
    Version,
}

/// Arguments of the `diff` command.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DiffArgs {
    /// District Clever ID.
    #[arg(long)]
    pub district: String,

    /// Also write the report to `<district>.json` in the working directory.
    #[arg(long, default_value = "false")]
    pub json: bool,
}
