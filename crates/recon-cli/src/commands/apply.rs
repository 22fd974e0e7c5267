//! Apply command implementation
//!
//! Reconciles a file-backed resource towards desired state.

use std::path::Path;

use colored::Colorize;

use recon_core::{FileResource, Presence, Profile, ReconcileAction, ReconcileOutcome, store};
use recon_tree::ConfigTree;

use super::Status;
use super::compare::print_colored_diff;
use crate::error::{CliError, Result};

/// Arguments for the apply command
#[derive(Debug, Clone, Copy)]
pub struct ApplyArgs<'a> {
    pub desired: Option<&'a Path>,
    pub state: &'a Path,
    pub profile: Option<&'a Path>,
    pub absent: bool,
    pub check: bool,
}

/// Run the apply command
///
/// In check mode a pending change exits with [`Status::Drifted`].
pub fn run_apply(args: ApplyArgs<'_>, json: bool) -> Result<Status> {
    let presence = if args.absent {
        Presence::Absent
    } else {
        Presence::Present
    };

    let desired: ConfigTree = match (args.desired, presence) {
        (Some(path), _) => store::load(path)?,
        (None, Presence::Absent) => ConfigTree::Null,
        (None, Presence::Present) => {
            return Err(CliError::user(
                "a desired-state document is required unless --absent is given",
            ));
        }
    };

    let reconciler = Profile::load_or_default(args.profile)?
        .reconciler()?
        .with_check_mode(args.check);
    let mut resource = FileResource::new(args.state);

    let outcome = reconciler.reconcile(&mut resource, &desired, presence)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome, args.state);
    }

    Ok(if outcome.check_mode && outcome.changed {
        Status::Drifted
    } else {
        Status::Reconciled
    })
}

fn print_outcome(outcome: &ReconcileOutcome, state: &Path) {
    let verb = match (outcome.action, outcome.check_mode) {
        (ReconcileAction::None, _) => {
            println!(
                "{} {} is already reconciled.",
                "OK".green().bold(),
                state.display().to_string().yellow()
            );
            return;
        }
        (ReconcileAction::Create, false) => "Created".green(),
        (ReconcileAction::Update, false) => "Updated".yellow(),
        (ReconcileAction::Delete, false) => "Deleted".red(),
        (ReconcileAction::Create, true) => "Would create".green(),
        (ReconcileAction::Update, true) => "Would update".yellow(),
        (ReconcileAction::Delete, true) => "Would delete".red(),
    };

    println!("{} {}", verb.bold(), state.display().to_string().yellow());

    if let Some(mismatch) = &outcome.mismatch {
        println!("  {}", mismatch);
    }
    if let Some(diff) = &outcome.diff {
        println!();
        print_colored_diff(diff);
    }
}
