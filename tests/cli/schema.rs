//! Tests for the offline schema command.

use crate::support::*;

#[test]
fn test_full_schema_needs_no_token() {
    let t = Test::new();

    let output = t.schema(None);
    assert_success(&output);
    let schema = stdout_json(&output);

    assert_eq!(schema["resources"].as_object().unwrap().len(), 8);
    assert_eq!(schema["data_sources"].as_object().unwrap().len(), 4);
    assert_eq!(
        schema["provider"]["attributes"]["session_token"]["sensitive"],
        true
    );
}

#[test]
fn test_single_type_schema() {
    let t = Test::new();

    let output = t.schema(Some("client_certificate"));
    assert_success(&output);
    let schema = stdout_json(&output);

    let attrs = &schema["resource"]["attributes"];
    assert_eq!(attrs["name"]["requires_replace"], true);
    assert_eq!(attrs["private_key_pem"]["sensitive"], true);
    assert!(schema["data_source"].is_null());
}

#[test]
fn test_organization_tier_default() {
    let t = Test::new();

    let output = t.schema(Some("inferadb_organization"));
    assert_success(&output);
    let schema = stdout_json(&output);
    assert_eq!(schema["resource"]["attributes"]["tier"]["default"], "dev");
    assert_eq!(schema["data_source"]["attributes"]["id"]["mode"], "required");
}

#[test]
fn test_unknown_type_schema() {
    let t = Test::new();

    let output = t.schema(Some("bucket"));
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown resource or data source type: bucket");
}
