//! Tests for configuration and input errors. None of these reach the API.

use crate::support::*;

/// Endpoint nothing listens on; any request would fail loudly.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

#[test]
fn test_missing_session_token() {
    let t = Test::new();

    let output = t.cmd().args(["read", "vault"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "missing session token");
    assert_stderr_contains(&output, "INFERADB_SESSION_TOKEN");
}

#[test]
fn test_token_from_environment() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("INFERADB_SESSION_TOKEN", "env-token")
        .args(["--endpoint", DEAD_ENDPOINT, "import", "vault", "1"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid import ID");
}

#[test]
fn test_import_wrong_arity() {
    let t = Test::new();

    let output = t
        .api_cmd(DEAD_ENDPOINT)
        .args(["import", "client_certificate", "1/2"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "<org_id>/<client_id>/<cert_id>");
    assert_stdout_excludes(&output, "{");
}

#[test]
fn test_unknown_resource_type() {
    let t = Test::new();

    let output = t
        .api_cmd(DEAD_ENDPOINT)
        .args(["create", "bucket"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown resource type: bucket");
    assert_stderr_contains(&output, "inferadb-provider schema");
}

#[test]
fn test_team_member_is_not_a_data_source() {
    let t = Test::new();

    let output = t
        .api_cmd(DEAD_ENDPOINT)
        .args(["data", "team_member"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown data source type");
}

#[test]
fn test_invalid_endpoint() {
    let t = Test::new();

    let output = t
        .api_cmd("ftp://example.com")
        .args(["import", "vault", "1/2"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid endpoint");
}

#[test]
fn test_invalid_json_document() {
    let t = Test::new();
    let plan = t.write_file("plan.json", "{not json");

    let output = t
        .api_cmd(DEAD_ENDPOINT)
        .args(["create", "vault", "--plan"])
        .arg(&plan)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid JSON document");
}

#[test]
fn test_missing_required_attribute() {
    let t = Test::new();
    let plan = t.write_json("plan.json", &serde_json::json!({"organization_id": "1"}));

    let output = t
        .api_cmd(DEAD_ENDPOINT)
        .args(["create", "team", "--plan"])
        .arg(&plan)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "missing required attribute \"name\" for team");
}

#[test]
fn test_certificate_update_refused() {
    let t = Test::new();
    let state = serde_json::json!({
        "id": "3", "organization_id": "1", "client_id": "2", "name": "primary"
    });
    let prior = t.write_json("prior.json", &state);
    let plan = t.write_json("plan.json", &state);

    let output = t
        .api_cmd(DEAD_ENDPOINT)
        .args(["update", "client_certificate", "--prior"])
        .arg(&prior)
        .arg("--plan")
        .arg(&plan)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be updated in place");
}

#[test]
fn test_config_file_rejects_unknown_keys() {
    let t = Test::new();
    let config = t.write_file("provider.toml", "[provider]\ntoken = \"x\"\n");

    let output = t
        .cmd()
        .arg("--config-file")
        .arg(&config)
        .args(["import", "vault", "1/2"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_missing_config_file() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--config-file", "does-not-exist.toml", "import", "vault", "1/2"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config file");
}
