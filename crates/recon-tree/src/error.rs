//! Error types for recon-tree

/// Result type for recon-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recon-tree operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl Error {
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
