//! Human-readable diffs between desired and observed state
//!
//! Observed state usually carries far more than the caller asked for
//! (read-only properties, server defaults). [`project`] trims observed down
//! to the shape desired specifies so the rendered diff only shows fields the
//! caller cares about.

use recon_tree::{ConfigTree, Mapping};
use similar::TextDiff;

/// Keep only the parts of `observed` that `desired` specifies.
///
/// Mapping keys absent from desired, or null in desired, are dropped.
/// Sequences and scalars are kept whole.
///
/// ```
/// use recon_compare::project;
/// use serde_json::json;
///
/// let desired = json!({"sku": {"name": "Standard"}, "tags": null});
/// let observed = json!({"sku": {"name": "Basic", "capacity": 1}, "tags": {"a": "b"}, "id": "/x"});
/// assert_eq!(project(&desired, &observed), json!({"sku": {"name": "Basic"}}));
/// ```
pub fn project(desired: &ConfigTree, observed: &ConfigTree) -> ConfigTree {
    match (desired, observed) {
        (ConfigTree::Object(desired_map), ConfigTree::Object(observed_map)) => {
            let projected: Mapping = desired_map
                .iter()
                .filter(|(_, value)| !value.is_null())
                .filter_map(|(key, value)| {
                    observed_map
                        .get(key)
                        .map(|observed_value| (key.clone(), project(value, observed_value)))
                })
                .collect();
            ConfigTree::Object(projected)
        }
        _ => observed.clone(),
    }
}

/// Remove null-valued mapping entries, which desired state uses to mean
/// "not specified".
fn prune_nulls(tree: &ConfigTree) -> ConfigTree {
    match tree {
        ConfigTree::Object(map) => ConfigTree::Object(
            map.iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key.clone(), prune_nulls(value)))
                .collect(),
        ),
        ConfigTree::Array(items) => ConfigTree::Array(items.iter().map(prune_nulls).collect()),
        other => other.clone(),
    }
}

/// Render a unified diff from observed to desired.
///
/// Returns an empty string when the projected observed tree and desired
/// tree print identically.
pub fn render_diff(desired: &ConfigTree, observed: &ConfigTree) -> String {
    let old = to_pretty(&project(desired, observed));
    let new = to_pretty(&prune_nulls(desired));

    if old == new {
        return String::new();
    }

    TextDiff::from_lines(&old, &new)
        .unified_diff()
        .context_radius(3)
        .header("observed", "desired")
        .to_string()
}

fn to_pretty(tree: &ConfigTree) -> String {
    let mut text = serde_json::to_string_pretty(tree).unwrap_or_default();
    text.push('\n');
    text
}
