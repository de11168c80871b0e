//! Clever roster diff CLI binary.

use std::env;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use repartee::cli::{Cli, Command, DiffArgs};
use repartee::commands;
use repartee::{count_table, BuildInfo, PrettyPrint, RetryPolicy, RetryingTransport, RosterError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let build = BuildInfo::from_build_env();

    let result = match cli.command {
        // Bare invocation lists the available commands.
        None => commands::help(&mut io::stdout()),
        Some(Command::Version) => {
            println!("{}", commands::version(&build));
            Ok(())
        }
        Some(Command::Diff(args)) => run_diff(&args).await,
    };

    match result {
        Ok(()) => {
            tracing::info!("successful completion");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_diff(args: &DiffArgs) -> repartee::Result<()> {
    let transport = Arc::new(RetryingTransport::new(RetryPolicy::default())?);

    let lookup = |key: &str| env::var(key).ok();
    let outcome = match commands::diff_with_lookup(lookup, transport, args, Path::new(".")).await {
        Ok(outcome) => outcome,
        Err(e @ RosterError::ConfigMissing(_)) => {
            eprintln!("Hint: Set CLEVER_ID, CLEVER_SECRET, MAP_CLEVER_ID and MAP_CLEVER_SECRET");
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    println!("{}", count_table(&outcome.accelerator, &outcome.growth));
    println!();
    println!("{}", outcome.report.pretty_print());
    if let Some(path) = outcome.json_path {
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}
