//! Normalization plans
//!
//! A plan is an ordered list of passes. Plans are usually declared in a
//! profile file and resolved against the profile's choice tables:
//!
//! ```toml
//! [[passes]]
//! path = "sku.name"
//! transform = "camelize"
//! capitalize_first = true
//!
//! [[passes]]
//! path = "security_rules.protocol"
//! transform = "map"
//! table = "protocol"
//! ```

use std::collections::BTreeMap;

use recon_tree::{ConfigTree, TreePath};
use serde::{Deserialize, Serialize};

use crate::choices::ChoiceTables;
use crate::error::{Error, Result};
use crate::transform::Transform;

/// Declarative form of a transform, as written in a plan file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transform", rename_all = "snake_case")]
pub enum TransformSpec {
    Camelize {
        #[serde(default)]
        capitalize_first: bool,
    },
    /// `table` names a choice table; `values` are inline entries that take
    /// precedence over the named table.
    Map {
        #[serde(default)]
        table: Option<String>,
        #[serde(default)]
        values: BTreeMap<String, String>,
    },
    Upper,
    Rename {
        new_name: String,
    },
    Expand {
        outer_name: String,
    },
}

/// Declarative form of a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSpec {
    pub path: TreePath,
    #[serde(flatten)]
    pub transform: TransformSpec,
}

impl PassSpec {
    /// Resolve table references and produce an executable pass.
    pub fn resolve(&self, choices: &ChoiceTables) -> Result<NormalizationPass> {
        let transform = match &self.transform {
            TransformSpec::Camelize { capitalize_first } => Transform::Camelize {
                capitalize_first: *capitalize_first,
            },
            TransformSpec::Map { table, values } => {
                let mut merged = match table {
                    Some(name) => choices
                        .get(name)
                        .cloned()
                        .ok_or_else(|| Error::UnknownChoiceTable {
                            table: name.clone(),
                            path: self.path.to_string(),
                        })?,
                    None => BTreeMap::new(),
                };
                merged.extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));

                if merged.is_empty() {
                    return Err(match table {
                        Some(name) => Error::EmptyChoiceTable {
                            table: name.clone(),
                            path: self.path.to_string(),
                        },
                        None => Error::EmptyMapTable {
                            path: self.path.to_string(),
                        },
                    });
                }
                Transform::Map { table: merged }
            }
            TransformSpec::Upper => Transform::Upper,
            TransformSpec::Rename { new_name } => Transform::Rename {
                new_name: new_name.clone(),
            },
            TransformSpec::Expand { outer_name } => Transform::Expand {
                outer_name: outer_name.clone(),
            },
        };

        Ok(NormalizationPass {
            path: self.path.clone(),
            transform,
        })
    }
}

/// A transform bound to the path it applies at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationPass {
    pub path: TreePath,
    pub transform: Transform,
}

impl NormalizationPass {
    pub fn new(path: TreePath, transform: Transform) -> Self {
        Self { path, transform }
    }

    /// Apply this pass, returning the number of locations edited.
    pub fn apply(&self, tree: &mut ConfigTree) -> usize {
        self.transform.apply(tree, self.path.segments())
    }
}

/// Applies an ordered list of passes to desired-state trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    passes: Vec<NormalizationPass>,
}

impl Normalizer {
    /// Create a normalizer with no passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a normalizer from declarative passes.
    pub fn from_specs(specs: &[PassSpec], choices: &ChoiceTables) -> Result<Self> {
        let passes = specs
            .iter()
            .map(|spec| spec.resolve(choices))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { passes })
    }

    /// Append a pass (builder style).
    pub fn with_pass(mut self, path: TreePath, transform: Transform) -> Self {
        self.push(NormalizationPass::new(path, transform));
        self
    }

    pub fn push(&mut self, pass: NormalizationPass) {
        self.passes.push(pass);
    }

    pub fn passes(&self) -> &[NormalizationPass] {
        &self.passes
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every pass in order over `tree`.
    ///
    /// Returns the total number of edited locations.
    pub fn normalize(&self, tree: &mut ConfigTree) -> usize {
        let mut edited = 0;
        for pass in &self.passes {
            let visited = pass.apply(tree);
            tracing::debug!(
                path = %pass.path,
                transform = pass.transform.kind(),
                visited,
                "Applied normalization pass"
            );
            edited += visited;
        }
        edited
    }

    /// Return a normalized copy of `tree`.
    pub fn normalized(&self, tree: &ConfigTree) -> ConfigTree {
        let mut copy = tree.clone();
        self.normalize(&mut copy);
        copy
    }
}
