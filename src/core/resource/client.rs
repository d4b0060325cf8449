//! `inferadb_client`: backend service identity.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{non_empty, or_empty, required, ResourceKind};
use crate::core::client::models::{self, CreateClientRequest, UpdateClientRequest};
use crate::core::client::Client;
use crate::core::schema::{Attribute, Schema};
use crate::error::{ApiResult, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    #[serde(default)]
    pub id: String,
    pub organization_id: String,
    /// Default vault for token generation.
    pub vault_id: Option<String>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceClient;

#[async_trait]
impl ResourceKind for ServiceClient {
    const KIND: &'static str = "client";
    const IMPORT_FORMAT: &'static [&'static str] = &["org_id", "client_id"];

    type State = ClientState;
    type Remote = models::ServiceClient;
    type CreateBody = CreateClientRequest;
    type UpdateBody = UpdateClientRequest;

    fn schema() -> Schema {
        Schema::new(
            "Manages a client: a backend service identity that authenticates \
             with certificates to obtain vault tokens.",
        )
        .attribute("id", Attribute::computed("Client ID."))
        .attribute(
            "organization_id",
            Attribute::required("ID of the owning organization.").replace(),
        )
        .attribute(
            "vault_id",
            Attribute::required("Default vault for token generation."),
        )
        .attribute("name", Attribute::required("Name of the client."))
        .attribute(
            "is_active",
            Attribute::computed_bool("Whether the client is active."),
        )
        .attribute("created_at", Attribute::computed("Creation timestamp."))
    }

    fn create_body(plan: &ClientState) -> Result<CreateClientRequest> {
        Ok(CreateClientRequest {
            name: required(Self::KIND, "name", &plan.name)?.to_string(),
            vault_id: required(Self::KIND, "vault_id", &plan.vault_id)?.to_string(),
        })
    }

    fn update_body(plan: &ClientState) -> Result<UpdateClientRequest> {
        Ok(UpdateClientRequest {
            name: or_empty(&plan.name),
            vault_id: or_empty(&plan.vault_id),
        })
    }

    fn apply(state: &mut ClientState, remote: models::ServiceClient) {
        state.name = Some(remote.name);
        state.vault_id = non_empty(remote.vault_id.into_string()).or(state.vault_id.take());
        state.is_active = Some(remote.is_active);
        state.created_at = non_empty(remote.created_at);
    }

    fn id(state: &ClientState) -> &str {
        &state.id
    }

    fn set_id(state: &mut ClientState, id: String) {
        state.id = id;
    }

    fn remote_id(remote: &models::ServiceClient) -> String {
        remote.id.to_string()
    }

    fn from_import(segments: &[String]) -> ClientState {
        ClientState {
            organization_id: segments[0].clone(),
            id: segments[1].clone(),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &Client,
        plan: &ClientState,
        body: &CreateClientRequest,
    ) -> ApiResult<models::ServiceClient> {
        client.create_client(&plan.organization_id, body).await
    }

    async fn fetch(&self, client: &Client, state: &ClientState) -> ApiResult<models::ServiceClient> {
        client.get_client(&state.organization_id, &state.id).await
    }

    async fn send_update(
        &self,
        client: &Client,
        state: &ClientState,
        body: &UpdateClientRequest,
    ) -> ApiResult<models::ServiceClient> {
        client
            .update_client(&state.organization_id, &state.id, body)
            .await
    }

    async fn remove(&self, client: &Client, state: &ClientState) -> ApiResult<()> {
        client.delete_client(&state.organization_id, &state.id).await
    }
}
