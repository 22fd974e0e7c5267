//! Tests for desired-vs-observed comparison

use pretty_assertions::assert_eq;
use recon_compare::{Comparator, CompareOptions, MismatchReason, MismatchReport, matches};
use recon_normalize::camelize;
use rstest::rstest;
use serde_json::{Value, json};

fn check(desired: &Value, observed: &Value) -> (bool, MismatchReport) {
    let mut report = MismatchReport::new();
    let matched = matches(desired, observed, "", &mut report);
    (matched, report)
}

#[rstest]
#[case(json!(null), json!(null))]
#[case(json!(null), json!(1))]
#[case(json!(null), json!({"a": [1, 2]}))]
#[case(json!(null), json!("anything"))]
fn test_null_desired_identity(#[case] desired: Value, #[case] observed: Value) {
    assert!(check(&desired, &observed).0);
}

#[rstest]
#[case(json!({"a": 1, "b": "two", "c": [3, 1, 2]}))]
#[case(json!([{"id": "x", "v": [true, false]}, {"id": "w"}]))]
#[case(json!({"nested": {"deeper": {"values": ["b", "a"]}}}))]
#[case(json!("scalar"))]
fn test_reflexive(#[case] tree: Value) {
    assert!(check(&tree, &tree).0);
}

#[test]
fn test_mapping_subset() {
    let desired = json!({"name": "vnet1", "address_prefixes": ["10.0.0.0/16"]});
    let observed = json!({
        "name": "vnet1",
        "address_prefixes": ["10.0.0.0/16"],
        "id": "/subscriptions/0/vnet1",
        "provisioning_state": "Succeeded"
    });
    assert!(check(&desired, &observed).0);

    let mut trimmed = observed.clone();
    trimmed.as_object_mut().unwrap().remove("address_prefixes");
    let (matched, report) = check(&desired, &trimmed);
    assert!(!matched);
    assert_eq!(report.first().unwrap().path, "/address_prefixes");
}

#[test]
fn test_sequence_length_gate() {
    let (matched, report) = check(&json!([1, 2, 3]), &json!([1, 2]));
    assert!(!matched);
    let mismatch = report.first().unwrap();
    assert!(mismatch.description().contains("length"));
    assert_eq!(
        mismatch.reason,
        MismatchReason::LengthDiffers {
            desired: 3,
            observed: Some(2)
        }
    );
}

#[test]
fn test_sequence_order_independent() {
    assert!(check(&json!([1, 2]), &json!([2, 1])).0);
    assert!(check(&json!(["b", "a", "c"]), &json!(["c", "b", "a"])).0);
    assert!(!check(&json!([1, 1]), &json!([1, 2])).0);
}

#[test]
fn test_id_keyed_sort() {
    let desired = json!([{"id": "b", "v": 1}, {"id": "a", "v": 2}]);
    let observed = json!([{"id": "a", "v": 2}, {"id": "b", "v": 1}]);
    assert!(check(&desired, &observed).0);
}

#[test]
fn test_name_keyed_sort_with_extra_observed_fields() {
    let desired = json!({
        "security_rules": [
            {"name": "ssh", "destination_port_range": 22},
            {"name": "http", "destination_port_range": 80}
        ]
    });
    let observed = json!({
        "security_rules": [
            {"name": "http", "destination_port_range": 80, "etag": "1"},
            {"name": "ssh", "destination_port_range": 22, "etag": "2"}
        ]
    });
    assert!(check(&desired, &observed).0);
}

#[test]
fn test_keyed_sort_detects_changed_element() {
    let desired = json!([{"name": "a", "port": 1}, {"name": "b", "port": 2}]);
    let observed = json!([{"name": "b", "port": 3}, {"name": "a", "port": 1}]);
    let (matched, report) = check(&desired, &observed);
    assert!(!matched);
    assert_eq!(report.first().unwrap().path, "/*/port");
}

#[test]
fn test_location_normalization() {
    assert!(check(&json!({"location": "East US"}), &json!({"location": "eastus"})).0);
    assert!(check(&json!({"location": "westeurope"}), &json!({"location": "West Europe"})).0);
}

#[test]
fn test_location_still_detects_region_change() {
    let (matched, report) = check(&json!({"location": "East US"}), &json!({"location": "westus"}));
    assert!(!matched);
    assert_eq!(report.first().unwrap().path, "/location");
}

#[test]
fn test_location_rule_can_be_disabled() {
    let comparator = Comparator::new(CompareOptions {
        case_insensitive_paths: Vec::new(),
    });
    let result = comparator.compare(&json!({"location": "East US"}), &json!({"location": "eastus"}));
    assert!(result.needs_update());
}

#[test]
fn test_end_to_end_sku_scenario() {
    let mut desired = json!({"sku": {"name": "standard"}});
    camelize(&mut desired, &["sku", "name"], true);
    assert_eq!(desired, json!({"sku": {"name": "Standard"}}));

    let observed = json!({"sku": {"name": "Standard", "capacity": 1}});
    assert!(check(&desired, &observed).0);
}

#[test]
fn test_end_to_end_sku_scenario_without_normalization_drifts() {
    let desired = json!({"sku": {"name": "standard"}});
    let observed = json!({"sku": {"name": "Standard", "capacity": 1}});
    let result = Comparator::default().compare(&desired, &observed);
    assert!(!result.matched);
    assert_eq!(result.mismatch.unwrap().path, "/sku/name");
}

#[test]
fn test_empty_sequences_compare_by_length() {
    assert!(check(&json!({"dns_servers": []}), &json!({"dns_servers": []})).0);
    let (matched, report) = check(&json!({"dns_servers": []}), &json!({"dns_servers": ["8.8.8.8"]}));
    assert!(!matched);
    assert_eq!(report.first().unwrap().path, "/dns_servers");
}

#[test]
fn test_mixed_kind_sequences_do_not_panic() {
    assert!(check(&json!([1, "a", null, true]), &json!([true, null, "a", 1])).0);
}
