//! Path parsing for configuration trees
//!
//! A [`TreePath`] names a location inside a [`ConfigTree`](crate::ConfigTree)
//! as an ordered list of mapping keys. Sequences are never indexed: a path
//! that runs into a sequence addresses the same field in every element.
//!
//! # Path Syntax
//!
//! - Dot-separated keys: `sku.name`
//! - Fields inside list elements: `security_rules.protocol`
//! - Keys that themselves contain `.` cannot be addressed
//!
//! # Examples
//!
//! ```
//! use recon_tree::TreePath;
//!
//! let path: TreePath = "security_rules.protocol".parse().unwrap();
//! assert_eq!(path.segments(), ["security_rules", "protocol"]);
//! assert_eq!(path.to_string(), "security_rules.protocol");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An ordered sequence of mapping keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TreePath {
    segments: Vec<String>,
}

impl TreePath {
    /// Build a path from already split segments.
    ///
    /// Segments must be non-empty and free of `.`, so every path displays as
    /// a string that parses back to the same segments. Keys that contain a
    /// dot cannot be addressed.
    ///
    /// ```
    /// use recon_tree::TreePath;
    ///
    /// assert_eq!(TreePath::new(["sku", "name"]).unwrap().to_string(), "sku.name");
    /// assert!(TreePath::new(["a.b"]).is_err());
    /// ```
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        for segment in &segments {
            check_segment(segment, &segments.join("."))?;
        }
        Ok(Self { segments })
    }

    /// Parse a dot-separated path.
    ///
    /// Empty segments (`a..b`, a leading or trailing dot, or an empty string)
    /// are rejected.
    ///
    /// ```
    /// use recon_tree::TreePath;
    ///
    /// assert!(TreePath::parse("sku.name").is_ok());
    /// assert!(TreePath::parse("sku..name").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::invalid_path(path, "path is empty"));
        }

        let mut segments = Vec::new();
        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(Error::invalid_path(path, "empty segment"));
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final key of the path, if any.
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Return a new path with `segment` appended.
    pub fn join(&self, segment: impl Into<String>) -> Result<Self> {
        let segment = segment.into();
        check_segment(&segment, &format!("{}.{}", self, segment))?;

        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Self { segments })
    }
}

fn check_segment(segment: &str, path: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(Error::invalid_path(path, "empty segment"));
    }
    if segment.contains('.') {
        return Err(Error::invalid_path(
            path,
            format!("segment '{}' contains '.'", segment),
        ));
    }
    Ok(())
}

impl FromStr for TreePath {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TreePath {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TreePath> for String {
    fn from(path: TreePath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
