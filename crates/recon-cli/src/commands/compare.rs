//! Compare command implementation
//!
//! Decides whether observed state already satisfies desired state.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use recon_compare::render_diff;
use recon_core::{Profile, store};
use recon_tree::ConfigTree;

use super::Status;
use crate::error::Result;

/// Run the compare command
pub fn run_compare(
    desired: &Path,
    observed: &Path,
    profile: Option<&Path>,
    show_diff: bool,
    json: bool,
) -> Result<Status> {
    let profile = Profile::load_or_default(profile)?;
    let normalizer = profile.normalizer()?;
    let comparator = profile.comparator();

    let desired_tree: ConfigTree = store::load(desired)?;
    let observed_tree: ConfigTree = store::load(observed)?;

    let desired_tree = normalizer.normalized(&desired_tree);
    let comparison = comparator.compare(&desired_tree, &observed_tree);
    let diff = (show_diff && !comparison.matched).then(|| render_diff(&desired_tree, &observed_tree));

    if json {
        let output = json!({
            "matched": comparison.matched,
            "needs_update": comparison.needs_update(),
            "mismatch": comparison.mismatch,
            "diff": diff,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if comparison.matched {
        println!(
            "{} Observed state satisfies desired state.",
            "OK".green().bold()
        );
    } else {
        if let Some(mismatch) = &comparison.mismatch {
            println!("{} {}", "Drift".yellow().bold(), mismatch);
        }
        if let Some(diff) = &diff {
            println!();
            print_colored_diff(diff);
        }
    }

    Ok(if comparison.matched {
        Status::Reconciled
    } else {
        Status::Drifted
    })
}

/// Print a unified diff with added lines green and removed lines red
pub(crate) fn print_colored_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}
