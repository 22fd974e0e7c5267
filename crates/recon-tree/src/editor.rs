//! Path-addressed editing of configuration trees
//!
//! [`apply`] walks a tree along a path and hands the mapping that holds the
//! addressed key to an edit callback. The callback owns the actual rewrite,
//! so the same walker drives every normalization transform.
//!
//! # Walk rules
//!
//! - A sequence broadcasts: every element is walked with the same path.
//! - A mapping with one segment left invokes the edit if the key is present
//!   and non-null.
//! - A mapping with more segments descends into `tree[path[0]]` if present
//!   and non-null.
//! - Missing keys, null values and scalars end the walk without effect.
//!
//! # Examples
//!
//! ```
//! use recon_tree::editor::apply;
//! use serde_json::json;
//!
//! let mut tree = json!({"rules": [{"protocol": "tcp"}, {"protocol": "udp"}]});
//! let visited = apply(&mut tree, &["rules", "protocol"], |map, key| {
//!     if let Some(value) = map.get_mut(key) {
//!         *value = json!("*");
//!     }
//! });
//! assert_eq!(visited, 2);
//! assert_eq!(tree, json!({"rules": [{"protocol": "*"}, {"protocol": "*"}]}));
//! ```

use serde_json::Value;

use crate::{ConfigTree, Mapping};

/// Apply `edit` at every location addressed by `path`.
///
/// Returns the number of times `edit` was invoked. An empty path addresses
/// nothing and returns zero.
pub fn apply<S, F>(tree: &mut ConfigTree, path: &[S], mut edit: F) -> usize
where
    S: AsRef<str>,
    F: FnMut(&mut Mapping, &str),
{
    apply_inner(tree, path, &mut edit)
}

fn apply_inner<S, F>(tree: &mut ConfigTree, path: &[S], edit: &mut F) -> usize
where
    S: AsRef<str>,
    F: FnMut(&mut Mapping, &str),
{
    match tree {
        Value::Array(items) => items
            .iter_mut()
            .map(|item| apply_inner(item, path, edit))
            .sum(),
        Value::Object(map) => match path {
            [] => 0,
            [key] => {
                let key = key.as_ref();
                if map.get(key).is_some_and(|value| !value.is_null()) {
                    edit(map, key);
                    1
                } else {
                    0
                }
            }
            [first, rest @ ..] => match map.get_mut(first.as_ref()) {
                Some(child) if !child.is_null() => apply_inner(child, rest, edit),
                _ => 0,
            },
        },
        _ => 0,
    }
}

/// Get the value at `path`, following mappings only.
///
/// Sequences are not broadcast into; a path that crosses one returns `None`.
///
/// ```
/// use recon_tree::editor::get;
/// use serde_json::json;
///
/// let tree = json!({"sku": {"name": "Standard"}});
/// assert_eq!(get(&tree, &["sku", "name"]), Some(&json!("Standard")));
/// assert_eq!(get(&tree, &["sku", "tier"]), None);
/// ```
pub fn get<'a, S: AsRef<str>>(tree: &'a ConfigTree, path: &[S]) -> Option<&'a ConfigTree> {
    let (first, rest) = match path.split_first() {
        Some(split) => split,
        None => return Some(tree),
    };

    let next = tree.as_object()?.get(first.as_ref())?;
    get(next, rest)
}
