//! Whole-tree key conversion

use recon_tree::{ConfigTree, Mapping, to_snake};

/// Rewrite every mapping key in `tree` to snake_case, recursively.
///
/// Used to present observed state, which arrives in camelCase, in the same
/// convention the caller writes desired state in. When two keys collapse to
/// the same snake_case name the later one (in key order) wins.
///
/// ```
/// use recon_normalize::keys_to_snake;
/// use serde_json::json;
///
/// let mut tree = json!({"provisioningState": "Succeeded", "ipConfigurations": [{"privateIPAddress": "10.0.0.4"}]});
/// keys_to_snake(&mut tree);
/// assert_eq!(tree, json!({"provisioning_state": "Succeeded", "ip_configurations": [{"private_ip_address": "10.0.0.4"}]}));
/// ```
pub fn keys_to_snake(tree: &mut ConfigTree) {
    match tree {
        ConfigTree::Object(map) => {
            let converted: Mapping = std::mem::take(map)
                .into_iter()
                .map(|(key, mut value)| {
                    keys_to_snake(&mut value);
                    (to_snake(&key), value)
                })
                .collect();
            *map = converted;
        }
        ConfigTree::Array(items) => items.iter_mut().for_each(keys_to_snake),
        _ => {}
    }
}
