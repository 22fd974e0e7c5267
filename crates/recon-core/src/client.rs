//! Resource collaborators
//!
//! The reconciler never talks to a real control plane itself. It asks a
//! [`ResourceClient`] for the observed state and hands it the desired state
//! when an update is needed.

use std::path::{Path, PathBuf};

use recon_tree::ConfigTree;

use crate::{Error, Result, store};

/// Access to one external resource.
pub trait ResourceClient {
    /// Fetch the current state, or `None` when the resource does not exist.
    fn fetch(&self) -> Result<Option<ConfigTree>>;

    /// Create or update the resource, returning its new observed state.
    fn submit(&mut self, desired: &ConfigTree) -> Result<ConfigTree>;

    /// Delete the resource.
    fn delete(&mut self) -> Result<()>;
}

/// A resource held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResource {
    state: Option<ConfigTree>,
    submits: usize,
    deletes: usize,
}

impl MemoryResource {
    /// A resource that does not exist yet.
    pub fn missing() -> Self {
        Self::default()
    }

    /// A resource that exists with `state`.
    pub fn existing(state: ConfigTree) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    pub fn state(&self) -> Option<&ConfigTree> {
        self.state.as_ref()
    }

    /// Number of `submit` calls made so far.
    pub fn submits(&self) -> usize {
        self.submits
    }

    /// Number of `delete` calls made so far.
    pub fn deletes(&self) -> usize {
        self.deletes
    }
}

impl ResourceClient for MemoryResource {
    fn fetch(&self) -> Result<Option<ConfigTree>> {
        Ok(self.state.clone())
    }

    fn submit(&mut self, desired: &ConfigTree) -> Result<ConfigTree> {
        self.submits += 1;
        self.state = Some(desired.clone());
        Ok(desired.clone())
    }

    fn delete(&mut self) -> Result<()> {
        self.deletes += 1;
        if self.state.take().is_none() {
            return Err(Error::client("delete of a resource that does not exist"));
        }
        Ok(())
    }
}

/// A resource stored as a JSON, YAML or TOML document on disk.
///
/// A missing file means the resource does not exist.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResourceClient for FileResource {
    fn fetch(&self) -> Result<Option<ConfigTree>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Resource file not found");
            return Ok(None);
        }
        store::load(&self.path).map(Some)
    }

    fn submit(&mut self, desired: &ConfigTree) -> Result<ConfigTree> {
        store::save(&self.path, desired)?;
        Ok(desired.clone())
    }

    fn delete(&mut self) -> Result<()> {
        std::fs::remove_file(&self.path).map_err(|e| Error::io(&self.path, e))
    }
}
