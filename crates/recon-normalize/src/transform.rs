//! The five normalization transforms
//!
//! Each transform is an edit callback for [`recon_tree::apply`]. `Camelize`,
//! `Map` and `Upper` rewrite a scalar in place and are idempotent: their
//! outputs are fixed points of themselves. The one exception is camelizing a
//! value with consecutive underscores, see [`recon_tree::to_camel`]. `Rename` and `Expand` move a value
//! to another key of the same mapping; a second application is a no-op only
//! because the source key is gone, so callers apply them once per path.

use std::collections::BTreeMap;

use recon_tree::{ConfigTree, Mapping, apply, to_camel};

/// A named rewrite applied at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// Replace a string with its camelCase (or PascalCase) form.
    Camelize { capitalize_first: bool },
    /// Replace a string with its entry in `table`, if it has one.
    Map { table: BTreeMap<String, String> },
    /// Replace a string with its upper-case form.
    Upper,
    /// Move the value to `new_name` in the same mapping.
    Rename { new_name: String },
    /// Move the field under the wrapper mapping `outer_name`.
    Expand { outer_name: String },
}

impl Transform {
    /// Short name used in logs and plan files.
    pub fn kind(&self) -> &'static str {
        match self {
            Transform::Camelize { .. } => "camelize",
            Transform::Map { .. } => "map",
            Transform::Upper => "upper",
            Transform::Rename { .. } => "rename",
            Transform::Expand { .. } => "expand",
        }
    }

    /// Whether applying the transform twice is the same as applying it once.
    pub fn is_idempotent(&self) -> bool {
        matches!(
            self,
            Transform::Camelize { .. } | Transform::Map { .. } | Transform::Upper
        )
    }

    /// Apply the transform at `path`, returning the number of locations edited.
    pub fn apply<S: AsRef<str>>(&self, tree: &mut ConfigTree, path: &[S]) -> usize {
        match self {
            Transform::Camelize { capitalize_first } => camelize(tree, path, *capitalize_first),
            Transform::Map { table } => map_values(tree, path, table),
            Transform::Upper => upper(tree, path),
            Transform::Rename { new_name } => rename(tree, path, new_name),
            Transform::Expand { outer_name } => expand(tree, path, outer_name),
        }
    }
}

fn rewrite_string(map: &mut Mapping, key: &str, rewrite: impl FnOnce(&str) -> Option<String>) {
    if let Some(ConfigTree::String(current)) = map.get_mut(key) {
        if let Some(replacement) = rewrite(current) {
            *current = replacement;
        }
    }
}

/// Camelize the string at `path`.
///
/// ```
/// use recon_normalize::camelize;
/// use serde_json::json;
///
/// let mut tree = json!({"sku": {"name": "standard"}});
/// camelize(&mut tree, &["sku", "name"], true);
/// assert_eq!(tree, json!({"sku": {"name": "Standard"}}));
/// ```
pub fn camelize<S: AsRef<str>>(tree: &mut ConfigTree, path: &[S], capitalize_first: bool) -> usize {
    apply(tree, path, |map, key| {
        rewrite_string(map, key, |value| Some(to_camel(value, capitalize_first)))
    })
}

/// Replace the string at `path` with its entry in `table`.
///
/// Values without an entry are left as they are, so an override table only
/// needs to list the exceptions the camelizer gets wrong.
pub fn map_values<S: AsRef<str>>(
    tree: &mut ConfigTree,
    path: &[S],
    table: &BTreeMap<String, String>,
) -> usize {
    apply(tree, path, |map, key| {
        rewrite_string(map, key, |value| table.get(value).cloned())
    })
}

/// Upper-case the string at `path`.
pub fn upper<S: AsRef<str>>(tree: &mut ConfigTree, path: &[S]) -> usize {
    apply(tree, path, |map, key| {
        rewrite_string(map, key, |value| Some(value.to_uppercase()))
    })
}

/// Move the value at `path` to `new_name` in the same mapping.
///
/// ```
/// use recon_normalize::rename;
/// use serde_json::json;
///
/// let mut tree = json!({"old": 1});
/// rename(&mut tree, &["old"], "new");
/// assert_eq!(tree, json!({"new": 1}));
/// ```
pub fn rename<S: AsRef<str>>(tree: &mut ConfigTree, path: &[S], new_name: &str) -> usize {
    apply(tree, path, |map, key| {
        if let Some(value) = map.remove(key) {
            map.insert(new_name.to_string(), value);
        }
    })
}

/// Move the value at `path` under the wrapper mapping `outer_name`.
///
/// The field keeps its key inside the wrapper, so several fields expanded
/// into the same wrapper end up side by side. The wrapper is created when
/// missing and replaced only when it holds something other than a mapping.
///
/// ```
/// use recon_normalize::expand;
/// use serde_json::json;
///
/// let mut tree = json!({"address_prefix": "10.0.0.0/24", "dns_servers": ["8.8.8.8"]});
/// expand(&mut tree, &["address_prefix"], "properties");
/// expand(&mut tree, &["dns_servers"], "properties");
/// assert_eq!(
///     tree,
///     json!({"properties": {"address_prefix": "10.0.0.0/24", "dns_servers": ["8.8.8.8"]}})
/// );
/// ```
pub fn expand<S: AsRef<str>>(tree: &mut ConfigTree, path: &[S], outer_name: &str) -> usize {
    apply(tree, path, |map, key| {
        let Some(value) = map.remove(key) else {
            return;
        };

        let wrapper = map
            .entry(outer_name.to_string())
            .or_insert_with(|| ConfigTree::Object(Mapping::new()));
        if !wrapper.is_object() {
            *wrapper = ConfigTree::Object(Mapping::new());
        }
        if let ConfigTree::Object(inner) = wrapper {
            inner.insert(key.to_string(), value);
        }
    })
}
