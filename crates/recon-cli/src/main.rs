//! recon CLI
//!
//! Command-line front end for normalizing desired state and reconciling it
//! against observed state.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::Status;
use error::Result;

fn main() {
    match run() {
        Ok(Status::Reconciled) => {}
        Ok(Status::Drifted) => std::process::exit(2),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Status> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    if let Err(e) = recon_core::logging::init(level) {
        eprintln!("{}: could not initialise logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<Status> {
    match cmd {
        Commands::Camelize { identifier, pascal } => commands::run_camelize(&identifier, pascal),
        Commands::Snake { identifier } => commands::run_snake(&identifier),
        Commands::SnakeKeys { file } => commands::run_snake_keys(&file),
        Commands::Normalize { desired, profile } => {
            commands::run_normalize(&desired, profile.as_deref())
        }
        Commands::Compare {
            desired,
            observed,
            profile,
            diff,
            json,
        } => commands::run_compare(&desired, &observed, profile.as_deref(), diff, json),
        Commands::Apply {
            desired,
            state,
            profile,
            absent,
            check,
            json,
        } => commands::run_apply(
            commands::ApplyArgs {
                desired: desired.as_deref(),
                state: &state,
                profile: profile.as_deref(),
                absent,
                check,
            },
            json,
        ),
    }
}
