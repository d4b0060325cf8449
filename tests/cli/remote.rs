//! CLI commands run against a mock Control API.

use crate::support::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_create_prints_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/organizations/1/teams"))
        .and(header("cookie", "infera_session=test-session-token"))
        .and(body_json(json!({"name": "platform"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "team": {"id": 55, "organization_id": 1, "name": "platform", "created_at": "t"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let t = Test::new();
    let plan = t.write_json("plan.json", &json!({"organization_id": "1", "name": "platform"}));
    let plan = plan.to_str().unwrap().to_string();

    let output = t
        .run_against(&server.uri(), &["create", "team", "--plan", &plan])
        .await;
    assert_success(&output);

    let state = stdout_json(&output);
    assert_eq!(state["id"], "55");
    assert_eq!(state["organization_id"], "1");
    assert_eq!(state["name"], "platform");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_reads_full_state() {
    let server = MockServer::start().await;
    mock_json(
        &server,
        "GET",
        "/v1/organizations/1",
        200,
        json!({"organization": {"id": "1", "name": "Acme", "tier": "TIER_MAX_V1", "created_at": "t"}}),
    )
    .await;

    let t = Test::new();
    let output = t
        .run_against(&server.uri(), &["import", "organization", "1"])
        .await;
    assert_success(&output);

    let state = stdout_json(&output);
    assert_eq!(state["id"], "1");
    assert_eq!(state["name"], "Acme");
    assert_eq!(state["tier"], "max");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_read_gone_prints_null() {
    let server = MockServer::start().await;
    mock_error(&server, "GET", "/v1/organizations/1/vaults/2", 404, "vault not found").await;

    let t = Test::new();
    let state = t.write_json("state.json", &json!({"id": "2", "organization_id": "1"}));
    let state = state.to_str().unwrap().to_string();

    let output = t
        .run_against(&server.uri(), &["read", "vault", "--state", &state])
        .await;
    assert_success(&output);
    assert_eq!(stdout_json(&output), serde_json::Value::Null);
    assert_stderr_contains(&output, "no longer exists");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_already_gone_succeeds() {
    let server = MockServer::start().await;
    mock_error(&server, "DELETE", "/v1/organizations/1/teams/2", 404, "team not found").await;

    let t = Test::new();
    let state = t.write_json("state.json", &json!({"id": "2", "organization_id": "1"}));
    let state = state.to_str().unwrap().to_string();

    let output = t
        .run_against(&server.uri(), &["delete", "team", "--state", &state])
        .await;
    assert_success(&output);
    assert_stderr_contains(&output, "inferadb_team deleted");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_reported() {
    let server = MockServer::start().await;
    mock_json(
        &server,
        "GET",
        "/v1/organizations/1/teams/2",
        403,
        json!({"error": "forbidden", "code": "access_denied", "message": "not a member"}),
    )
    .await;

    let t = Test::new();
    let output = t.run_against(&server.uri(), &["import", "team", "1/2"]).await;
    assert_failure(&output);
    assert_stderr_contains(&output, "could not read team 2");
    assert_stderr_contains(&output, "access_denied - not a member");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_data_source_not_found() {
    let server = MockServer::start().await;
    mock_error(&server, "GET", "/v1/organizations/1/clients/2", 404, "client not found").await;

    let t = Test::new();
    let config = t.write_json("config.json", &json!({"organization_id": "1", "id": "2"}));
    let config = config.to_str().unwrap().to_string();

    let output = t
        .run_against(&server.uri(), &["data", "client", "--config", &config])
        .await;
    assert_failure(&output);
    assert_stderr_contains(&output, "client 2 not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_deactivate_and_revoke() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/organizations/1/clients/2/deactivate"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/organizations/1/clients/2/certificates/3/revoke"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let t = Test::new();
    let output = t
        .run_against(&server.uri(), &["deactivate-client", "1/2"])
        .await;
    assert_success(&output);
    assert_stderr_contains(&output, "client 2 deactivated");

    let output = t
        .run_against(&server.uri(), &["revoke-certificate", "1/2/3"])
        .await;
    assert_success(&output);
    assert_stderr_contains(&output, "certificate 3 revoked");
}
