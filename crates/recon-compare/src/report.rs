//! Mismatch reporting
//!
//! A comparison stops at the first difference it finds, so a report holds at
//! most one [`Mismatch`]. Later records are ignored.

use std::fmt;

use recon_tree::ConfigTree;
use serde::{Deserialize, Serialize};

/// Why desired and observed differ at a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchReason {
    /// Desired is a mapping but observed is null or another shape.
    NotAMapping { observed: ConfigTree },
    /// Desired is a sequence but observed is not, or has another length.
    LengthDiffers {
        desired: usize,
        observed: Option<usize>,
    },
    /// Two scalars are not equal.
    ValueDiffers {
        desired: ConfigTree,
        observed: ConfigTree,
    },
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchReason::NotAMapping { .. } => write!(f, "old value is null/not a dict"),
            MismatchReason::LengthDiffers { .. } => write!(f, "length is different or null"),
            MismatchReason::ValueDiffers { desired, observed } => {
                write!(f, "{} != {}", desired, observed)
            }
        }
    }
}

/// The first difference found by a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mismatch {
    /// Slash-separated location, e.g. `/sku/name` or `/rules/*/port`.
    pub path: String,
    pub reason: MismatchReason,
}

impl Mismatch {
    pub fn new(path: impl Into<String>, reason: MismatchReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }

    /// Human-readable explanation, without the path.
    pub fn description(&self) -> String {
        self.reason.to_string()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "changed [{}] {}", self.path, self.reason)
    }
}

/// Holds the first mismatch recorded during a comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MismatchReport {
    first: Option<Mismatch>,
}

impl MismatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mismatch unless one is already held.
    pub fn record(&mut self, mismatch: Mismatch) {
        if self.first.is_none() {
            self.first = Some(mismatch);
        }
    }

    pub fn first(&self) -> Option<&Mismatch> {
        self.first.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn into_mismatch(self) -> Option<Mismatch> {
        self.first
    }
}
