//! Cross-crate scenario tests
//!
//! Each test drives a desired-state document through normalization,
//! comparison and reconciliation the way a resource module would.

use std::fs;

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

use recon_compare::{Comparator, MismatchReason, MismatchReport, matches};
use recon_core::{
    FileResource, MemoryResource, Presence, Profile, ReconcileAction, ResourceClient, store,
};
use recon_normalize::{Normalizer, Transform, camelize, keys_to_snake};
use recon_tree::TreePath;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Network security group profile used by several scenarios
const NSG_PROFILE: &str = r#"
[compare]
case_insensitive_paths = ["/location"]

[choices.protocol]
tcp = "Tcp"
udp = "Udp"
"*" = "*"

[choices.access]
allow = "Allow"
deny = "Deny"

[[passes]]
path = "security_rules.protocol"
transform = "map"
table = "protocol"

[[passes]]
path = "security_rules.access"
transform = "map"
table = "access"

[[passes]]
path = "security_rules.direction"
transform = "camelize"
capitalize_first = true
"#;

fn nsg_profile() -> Profile {
    toml::from_str(NSG_PROFILE).unwrap()
}

fn observed_nsg() -> serde_json::Value {
    json!({
        "id": "/subscriptions/1/resourceGroups/rg/providers/nsg/web",
        "name": "web",
        "location": "westeurope",
        "provisioning_state": "Succeeded",
        "security_rules": [
            {"name": "ssh", "protocol": "Tcp", "access": "Deny", "direction": "Inbound", "priority": 200},
            {"name": "http", "protocol": "Tcp", "access": "Allow", "direction": "Inbound", "priority": 100}
        ]
    })
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_sku_scenario() {
    let mut desired = json!({"sku": {"name": "standard"}});
    camelize(&mut desired, &["sku", "name"], true);
    assert_eq!(desired, json!({"sku": {"name": "Standard"}}));

    let observed = json!({"sku": {"name": "Standard", "capacity": 1}});
    let mut report = MismatchReport::new();
    assert!(matches(&desired, &observed, "", &mut report));
    assert!(report.is_empty());
}

#[test]
fn test_nsg_profile_reconciles_reordered_rules() {
    let profile = nsg_profile();
    let desired = json!({
        "location": "West Europe",
        "security_rules": [
            {"name": "http", "protocol": "tcp", "access": "allow", "direction": "inbound", "priority": 100},
            {"name": "ssh", "protocol": "tcp", "access": "deny", "direction": "inbound", "priority": 200}
        ],
        "tags": null
    });

    let normalized = profile.normalizer().unwrap().normalized(&desired);
    let comparison = profile.comparator().compare(&normalized, &observed_nsg());
    assert!(comparison.matched, "{:?}", comparison.mismatch);
}

#[test]
fn test_nsg_profile_reports_first_changed_rule() {
    let profile = nsg_profile();
    let desired = json!({
        "security_rules": [
            {"name": "http", "protocol": "tcp", "access": "allow", "priority": 100},
            {"name": "ssh", "protocol": "tcp", "access": "allow", "priority": 200}
        ]
    });

    let normalized = profile.normalizer().unwrap().normalized(&desired);
    let comparison = profile.comparator().compare(&normalized, &observed_nsg());

    let mismatch = comparison.mismatch.unwrap();
    assert_eq!(mismatch.path, "/security_rules/*/access");
    assert_eq!(
        mismatch.reason,
        MismatchReason::ValueDiffers {
            desired: json!("Allow"),
            observed: json!("Deny"),
        }
    );
}

#[test]
fn test_observed_state_in_camel_case_is_snaked_before_comparison() {
    let mut observed = json!({
        "properties": {
            "addressSpace": {"addressPrefixes": ["10.0.0.0/16"]},
            "enableDdosProtection": false
        }
    });
    keys_to_snake(&mut observed);

    let desired = json!({
        "properties": {
            "address_space": {"address_prefixes": ["10.0.0.0/16"]},
            "enable_ddos_protection": false
        }
    });
    assert!(Comparator::default().compare(&desired, &observed).matched);
}

#[test]
fn test_expand_then_compare_against_wrapped_observed() {
    let normalizer = Normalizer::new()
        .with_pass(
            TreePath::parse("tier").unwrap(),
            Transform::Expand {
                outer_name: "properties".to_string(),
            },
        )
        .with_pass(
            TreePath::parse("replicas").unwrap(),
            Transform::Expand {
                outer_name: "properties".to_string(),
            },
        )
        .with_pass(
            TreePath::parse("properties.tier").unwrap(),
            Transform::Upper,
        );

    let desired = normalizer.normalized(&json!({"name": "web", "tier": "gold", "replicas": 3}));
    assert_eq!(
        desired,
        json!({"name": "web", "properties": {"tier": "GOLD", "replicas": 3}})
    );

    let observed = json!({
        "name": "web",
        "properties": {"tier": "GOLD", "replicas": 3, "state": "Running"}
    });
    assert!(Comparator::default().compare(&desired, &observed).matched);
}

#[test]
fn test_memory_resource_converges() {
    let reconciler = nsg_profile().reconciler().unwrap();
    let desired = json!({
        "security_rules": [
            {"name": "ssh", "protocol": "tcp", "access": "deny", "direction": "inbound"}
        ]
    });
    let mut resource = MemoryResource::missing();

    let first = reconciler
        .reconcile(&mut resource, &desired, Presence::Present)
        .unwrap();
    assert_eq!(first.action, ReconcileAction::Create);

    let second = reconciler
        .reconcile(&mut resource, &desired, Presence::Present)
        .unwrap();
    assert_eq!(second.action, ReconcileAction::None);
    assert!(!second.changed);
    assert_eq!(resource.submits(), 1);
    assert_eq!(
        resource.state().unwrap()["security_rules"][0]["protocol"],
        json!("Tcp")
    );
}

#[test]
fn test_file_resource_lifecycle_with_profile_on_disk() {
    let temp = TempDir::new().unwrap();
    let profile_path = temp.path().join("nsg.toml");
    fs::write(&profile_path, NSG_PROFILE).unwrap();
    let state_path = temp.path().join("nsg.yaml");

    let reconciler = Profile::load(&profile_path).unwrap().reconciler().unwrap();
    let mut resource = FileResource::new(&state_path);
    let desired = json!({"security_rules": [{"name": "http", "protocol": "udp"}]});

    let created = reconciler
        .reconcile(&mut resource, &desired, Presence::Present)
        .unwrap();
    assert_eq!(created.action, ReconcileAction::Create);
    let on_disk: serde_json::Value = store::load(&state_path).unwrap();
    assert_eq!(on_disk, json!({"security_rules": [{"name": "http", "protocol": "Udp"}]}));

    let changed = json!({"security_rules": [{"name": "http", "protocol": "tcp"}]});
    let updated = reconciler
        .reconcile(&mut resource, &changed, Presence::Present)
        .unwrap();
    assert_eq!(updated.action, ReconcileAction::Update);
    assert_eq!(
        updated.mismatch.unwrap().to_string(),
        r#"changed [/security_rules/*/protocol] "Tcp" != "Udp""#
    );
    assert!(updated.diff.unwrap().contains("+      \"protocol\": \"Tcp\""));

    let deleted = reconciler
        .reconcile(&mut resource, &serde_json::Value::Null, Presence::Absent)
        .unwrap();
    assert_eq!(deleted.action, ReconcileAction::Delete);
    assert_eq!(resource.fetch().unwrap(), None);
}

#[test]
fn test_check_mode_reports_without_touching_file() {
    let temp = TempDir::new().unwrap();
    let state_path = temp.path().join("state.json");
    store::save(&state_path, &json!({"sku": {"name": "Standard"}})).unwrap();
    let before = fs::read_to_string(&state_path).unwrap();

    let reconciler = Profile::default().reconciler().unwrap().with_check_mode(true);
    let mut resource = FileResource::new(&state_path);

    let outcome = reconciler
        .reconcile(&mut resource, &json!({"sku": {"name": "Premium"}}), Presence::Present)
        .unwrap();
    assert_eq!(outcome.action, ReconcileAction::Update);
    assert!(outcome.check_mode);
    assert_eq!(fs::read_to_string(&state_path).unwrap(), before);

    let outcome = reconciler
        .reconcile(&mut resource, &serde_json::Value::Null, Presence::Absent)
        .unwrap();
    assert_eq!(outcome.action, ReconcileAction::Delete);
    assert!(state_path.exists());
}
