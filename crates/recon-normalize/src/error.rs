//! Error types for recon-normalize

/// Result type for recon-normalize operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a normalizer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown choice table '{table}' referenced by pass at {path}")]
    UnknownChoiceTable { table: String, path: String },

    #[error("Map pass at {path} has neither a table nor inline values")]
    EmptyMapTable { path: String },

    #[error("Choice table '{table}' used by map pass at {path} has no entries")]
    EmptyChoiceTable { table: String, path: String },

    #[error(transparent)]
    Tree(#[from] recon_tree::Error),
}
