//! Identifier and key case conversion commands

use std::path::Path;

use recon_core::store;
use recon_normalize::keys_to_snake;
use recon_tree::{ConfigTree, to_camel, to_snake};

use super::Status;
use crate::error::Result;

pub fn run_camelize(identifier: &str, pascal: bool) -> Result<Status> {
    println!("{}", to_camel(identifier, pascal));
    Ok(Status::Reconciled)
}

pub fn run_snake(identifier: &str) -> Result<Status> {
    println!("{}", to_snake(identifier));
    Ok(Status::Reconciled)
}

/// Print `file` with all keys in snake_case.
pub fn run_snake_keys(file: &Path) -> Result<Status> {
    let mut tree: ConfigTree = store::load(file)?;
    keys_to_snake(&mut tree);
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(Status::Reconciled)
}
