//! Total ordering over configuration trees
//!
//! Sequences are compared as unordered collections by sorting both sides
//! first, which needs an ordering that accepts any mix of values. Values of
//! different kinds order as null < bool < number < string < sequence <
//! mapping.

use std::cmp::Ordering;

use recon_tree::ConfigTree;
use serde_json::Number;

static NULL: ConfigTree = ConfigTree::Null;

fn kind_rank(value: &ConfigTree) -> u8 {
    match value {
        ConfigTree::Null => 0,
        ConfigTree::Bool(_) => 1,
        ConfigTree::Number(_) => 2,
        ConfigTree::String(_) => 3,
        ConfigTree::Array(_) => 4,
        ConfigTree::Object(_) => 5,
    }
}

/// Compare two numbers by value, so that `1` and `1.0` are equal.
pub fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.cmp(&y);
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Total order over trees.
pub fn compare_values(a: &ConfigTree, b: &ConfigTree) -> Ordering {
    match (a, b) {
        (ConfigTree::Null, ConfigTree::Null) => Ordering::Equal,
        (ConfigTree::Bool(x), ConfigTree::Bool(y)) => x.cmp(y),
        (ConfigTree::Number(x), ConfigTree::Number(y)) => compare_numbers(x, y),
        (ConfigTree::String(x), ConfigTree::String(y)) => x.cmp(y),
        (ConfigTree::Array(x), ConfigTree::Array(y)) => x
            .iter()
            .zip(y.iter())
            .map(|(l, r)| compare_values(l, r))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (ConfigTree::Object(x), ConfigTree::Object(y)) => x
            .iter()
            .zip(y.iter())
            .map(|((lk, lv), (rk, rv))| lk.cmp(rk).then_with(|| compare_values(lv, rv)))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// The field of a mapping element, or null when absent.
pub fn field<'a>(element: &'a ConfigTree, key: &str) -> &'a ConfigTree {
    element.get(key).unwrap_or(&NULL)
}

/// Choose the key mapping elements of two sequences are sorted by.
///
/// `id` when both first elements carry one, else `name` when both do, else
/// the first key of the observed first element. `None` when there is nothing
/// to sort by.
pub fn sort_key(desired_first: &ConfigTree, observed_first: &ConfigTree) -> Option<String> {
    for candidate in ["id", "name"] {
        if desired_first.get(candidate).is_some() && observed_first.get(candidate).is_some() {
            return Some(candidate.to_string());
        }
    }
    observed_first.as_object()?.keys().next().cloned()
}
