//! Normalize command implementation

use std::path::Path;

use recon_core::{Profile, store};
use recon_tree::ConfigTree;

use super::Status;
use crate::error::Result;

/// Apply the profile's passes to `desired` and print the normalized tree.
pub fn run_normalize(desired: &Path, profile: Option<&Path>) -> Result<Status> {
    let profile = Profile::load_or_default(profile)?;
    let normalizer = profile.normalizer()?;

    let mut tree: ConfigTree = store::load(desired)?;
    let edited = normalizer.normalize(&mut tree);
    tracing::debug!(edited, passes = normalizer.passes().len(), "Normalized desired state");

    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(Status::Reconciled)
}
