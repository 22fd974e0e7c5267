//! Configuration trees for desired/observed state reconciliation
//!
//! Provides the loosely typed tree model shared by the normalizer and the
//! comparator, a path-addressed editor that broadcasts into sequences, and
//! snake_case / camelCase identifier conversion.

pub mod case;
pub mod editor;
pub mod error;
pub mod path;

pub use case::{to_camel, to_snake};
pub use editor::{apply, get};
pub use error::{Error, Result};
pub use path::TreePath;

/// A loosely typed configuration tree.
///
/// Objects are mappings, arrays are sequences, everything else is a scalar.
/// Trees come from deserialized user configuration or API responses and are
/// therefore acyclic.
pub type ConfigTree = serde_json::Value;

/// The mapping node of a [`ConfigTree`].
pub type Mapping = serde_json::Map<String, ConfigTree>;
