//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reconcile desired configuration trees against observed state
#[derive(Parser, Debug)]
#[command(name = "recon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Convert a snake_case identifier to camelCase
    Camelize {
        /// Identifier to convert
        identifier: String,

        /// Capitalize the first segment too (PascalCase)
        #[arg(long)]
        pascal: bool,
    },

    /// Convert a camelCase identifier to snake_case
    Snake {
        /// Identifier to convert
        identifier: String,
    },

    /// Print a document with every key converted to snake_case
    SnakeKeys {
        /// JSON, YAML or TOML document
        file: PathBuf,
    },

    /// Apply a profile's normalization passes and print the result
    Normalize {
        /// Desired-state document
        desired: PathBuf,

        /// Reconciliation profile (TOML, JSON or YAML)
        #[arg(short, long, env = "RECON_PROFILE")]
        profile: Option<PathBuf>,
    },

    /// Compare desired state against observed state
    ///
    /// Exits 0 when observed already satisfies desired, 2 when an update
    /// is needed.
    ///
    /// Examples:
    ///   recon compare desired.yaml observed.json
    ///   recon compare desired.yaml observed.json -p nsg.toml --diff
    Compare {
        /// Desired-state document
        desired: PathBuf,

        /// Observed-state document
        observed: PathBuf,

        /// Reconciliation profile (TOML, JSON or YAML)
        #[arg(short, long, env = "RECON_PROFILE")]
        profile: Option<PathBuf>,

        /// Print a unified diff from observed to desired
        #[arg(long)]
        diff: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Reconcile a file-backed resource towards desired state
    ///
    /// The state file plays the part of the remote resource: a missing file
    /// is created, a drifted one is rewritten.
    Apply {
        /// Desired-state document
        desired: Option<PathBuf>,

        /// File holding the resource's current state
        #[arg(short, long)]
        state: PathBuf,

        /// Reconciliation profile (TOML, JSON or YAML)
        #[arg(short, long, env = "RECON_PROFILE")]
        profile: Option<PathBuf>,

        /// Ensure the resource does not exist
        #[arg(long)]
        absent: bool,

        /// Report what would change without changing it
        #[arg(long)]
        check: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
