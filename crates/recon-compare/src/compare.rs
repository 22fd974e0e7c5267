//! Structural comparison of desired and observed state
//!
//! The comparison is asymmetric: it checks that observed satisfies what
//! desired specifies, not that the two trees are equal. Rules, in order:
//!
//! 1. A null desired value matches anything.
//! 2. A desired mapping needs an observed mapping; every desired key is
//!    compared against the observed value under the same key (missing keys
//!    compare as null). The first failing key stops the walk.
//! 3. A desired sequence needs an observed sequence of the same length. Both
//!    are sorted (mapping elements by a chosen key, scalars naturally) and
//!    compared pairwise under the shared path suffix `/*`.
//! 4. Scalars compare by value. Paths listed as case-insensitive (by default
//!    `/location`) ignore spaces and letter case on both sides.

use recon_tree::ConfigTree;
use serde::{Deserialize, Serialize};

use crate::order::{compare_numbers, compare_values, field, sort_key};
use crate::report::{Mismatch, MismatchReason, MismatchReport};

/// Tunables for [`Comparator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Slash-separated paths whose string values are compared ignoring
    /// spaces and case, e.g. region names where `East US` equals `eastus`.
    pub case_insensitive_paths: Vec<String>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            case_insensitive_paths: vec!["/location".to_string()],
        }
    }
}

/// Outcome of comparing one desired tree against one observed tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// True when observed already satisfies desired.
    pub matched: bool,
    /// The first difference, when `matched` is false.
    pub mismatch: Option<Mismatch>,
}

impl Comparison {
    /// True when an update is needed to reach the desired state.
    pub fn needs_update(&self) -> bool {
        !self.matched
    }
}

/// Compares desired-state trees against observed-state trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparator {
    options: CompareOptions,
}

impl Comparator {
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compare two whole trees.
    pub fn compare(&self, desired: &ConfigTree, observed: &ConfigTree) -> Comparison {
        let mut report = MismatchReport::new();
        let matched = self.matches(desired, observed, "", &mut report);

        if let Some(mismatch) = report.first() {
            tracing::debug!(path = %mismatch.path, "{}", mismatch);
        }

        Comparison {
            matched,
            mismatch: report.into_mismatch(),
        }
    }

    /// Compare `desired` against `observed` at `path`.
    ///
    /// Returns true iff no mismatch was found. On false, `report` holds the
    /// first mismatch unless it already held one.
    pub fn matches(
        &self,
        desired: &ConfigTree,
        observed: &ConfigTree,
        path: &str,
        report: &mut MismatchReport,
    ) -> bool {
        match desired {
            ConfigTree::Null => true,
            ConfigTree::Object(desired_map) => {
                if !observed.is_object() {
                    report.record(Mismatch::new(
                        path,
                        MismatchReason::NotAMapping {
                            observed: observed.clone(),
                        },
                    ));
                    return false;
                }

                desired_map.iter().all(|(key, desired_value)| {
                    let observed_value = field(observed, key);
                    let child_path = format!("{}/{}", path, key);
                    self.matches(desired_value, observed_value, &child_path, report)
                })
            }
            ConfigTree::Array(desired_items) => {
                let observed_items = match observed.as_array() {
                    Some(items) if items.len() == desired_items.len() => items,
                    other => {
                        report.record(Mismatch::new(
                            path,
                            MismatchReason::LengthDiffers {
                                desired: desired_items.len(),
                                observed: other.map(Vec::len),
                            },
                        ));
                        return false;
                    }
                };

                let (desired_sorted, observed_sorted) =
                    sorted_pair(desired_items, observed_items);
                let element_path = format!("{}/*", path);

                desired_sorted
                    .iter()
                    .zip(observed_sorted.iter())
                    .all(|(d, o)| self.matches(d, o, &element_path, report))
            }
            _ => {
                if self.scalars_equal(desired, observed, path) {
                    true
                } else {
                    report.record(Mismatch::new(
                        path,
                        MismatchReason::ValueDiffers {
                            desired: desired.clone(),
                            observed: observed.clone(),
                        },
                    ));
                    false
                }
            }
        }
    }

    fn scalars_equal(&self, desired: &ConfigTree, observed: &ConfigTree, path: &str) -> bool {
        match (desired, observed) {
            (ConfigTree::String(d), ConfigTree::String(o)) if self.is_case_insensitive(path) => {
                fold_region(d) == fold_region(o)
            }
            (ConfigTree::Number(d), ConfigTree::Number(o)) => compare_numbers(d, o).is_eq(),
            _ => desired == observed,
        }
    }

    fn is_case_insensitive(&self, path: &str) -> bool {
        self.options
            .case_insensitive_paths
            .iter()
            .any(|p| p == path)
    }
}

fn fold_region(value: &str) -> String {
    value.replace(' ', "").to_lowercase()
}

/// Sort both sequences the same way before pairwise comparison.
///
/// Empty sequences have no first element to choose a sort key from and are
/// returned as they are.
fn sorted_pair<'a>(
    desired: &'a [ConfigTree],
    observed: &'a [ConfigTree],
) -> (Vec<&'a ConfigTree>, Vec<&'a ConfigTree>) {
    let mut desired_sorted: Vec<&ConfigTree> = desired.iter().collect();
    let mut observed_sorted: Vec<&ConfigTree> = observed.iter().collect();

    let (Some(desired_first), Some(observed_first)) = (desired.first(), observed.first()) else {
        return (desired_sorted, observed_sorted);
    };

    if observed_first.is_object() {
        if let Some(key) = sort_key(desired_first, observed_first) {
            let by_key = |a: &&ConfigTree, b: &&ConfigTree| {
                compare_values(field(a, &key), field(b, &key))
            };
            desired_sorted.sort_by(by_key);
            observed_sorted.sort_by(by_key);
        }
    } else {
        desired_sorted.sort_by(|a, b| compare_values(a, b));
        observed_sorted.sort_by(|a, b| compare_values(a, b));
    }

    (desired_sorted, observed_sorted)
}

/// Compare with default options.
///
/// ```
/// use recon_compare::{MismatchReport, matches};
/// use serde_json::json;
///
/// let mut report = MismatchReport::new();
/// let desired = json!({"sku": {"name": "Standard"}});
/// let observed = json!({"sku": {"name": "Standard", "capacity": 1}});
/// assert!(matches(&desired, &observed, "", &mut report));
/// assert!(report.is_empty());
/// ```
pub fn matches(
    desired: &ConfigTree,
    observed: &ConfigTree,
    path: &str,
    report: &mut MismatchReport,
) -> bool {
    Comparator::default().matches(desired, observed, path, report)
}
