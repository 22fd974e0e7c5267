//! Reconciliation profiles
//!
//! A profile bundles everything needed to reconcile one kind of resource:
//! comparison options, choice tables and the normalization passes applied to
//! desired state.
//!
//! ```toml
//! [compare]
//! case_insensitive_paths = ["/location"]
//!
//! [choices.protocol]
//! tcp = "Tcp"
//! udp = "Udp"
//!
//! [[passes]]
//! path = "security_rules.protocol"
//! transform = "map"
//! table = "protocol"
//! ```

use std::path::Path;

use recon_compare::{CompareOptions, Comparator};
use recon_normalize::{ChoiceTables, Normalizer, PassSpec};
use serde::{Deserialize, Serialize};

use crate::reconciler::Reconciler;
use crate::{Result, store};

/// Declarative reconciliation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub compare: CompareOptions,
    #[serde(default)]
    pub choices: ChoiceTables,
    #[serde(default)]
    pub passes: Vec<PassSpec>,
}

impl Profile {
    /// Load a profile from a TOML, JSON or YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        store::load(path)
    }

    /// Load `path` if given, otherwise use the default profile.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Build the normalizer described by `passes`.
    pub fn normalizer(&self) -> Result<Normalizer> {
        Ok(Normalizer::from_specs(&self.passes, &self.choices)?)
    }

    pub fn comparator(&self) -> Comparator {
        Comparator::new(self.compare.clone())
    }

    pub fn reconciler(&self) -> Result<Reconciler> {
        Ok(Reconciler::new(self.normalizer()?, self.comparator()))
    }
}
