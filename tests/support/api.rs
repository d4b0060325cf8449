//! Mock Control API helpers built on wiremock.

use inferadb_provider::core::client::Client;
use inferadb_provider::core::provider::Provider;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_TOKEN: &str = "test-session-token";

/// Client pointed at `server` with the test session token.
pub fn client_for(server: &MockServer) -> Client {
    Client::new(&server.uri(), SESSION_TOKEN).expect("failed to build client")
}

/// Provider pointed at `server`.
pub fn provider_for(server: &MockServer) -> Provider {
    Provider::new(client_for(server))
}

/// Respond to `verb path` with `status` and a JSON body.
pub async fn mock_json(server: &MockServer, verb: &str, route: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Respond to `verb path` with `status` and no body.
pub async fn mock_empty(server: &MockServer, verb: &str, route: &str, status: u16) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Respond to `verb path` with an API error body.
pub async fn mock_error(server: &MockServer, verb: &str, route: &str, status: u16, message: &str) {
    mock_json(
        server,
        verb,
        route,
        status,
        serde_json::json!({ "error": message }),
    )
    .await;
}

/// Number of requests the server has seen.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}

/// Body of the last request, parsed as JSON.
pub async fn last_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap_or_default();
    let last = requests.last().expect("no requests received");
    serde_json::from_slice(&last.body).expect("request body is not JSON")
}
