//! `inferadb_vault`: authorization data store inside an organization.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{non_empty, or_empty, required, ResourceKind};
use crate::core::client::models::{self, CreateVaultRequest, UpdateVaultRequest};
use crate::core::client::Client;
use crate::core::schema::{Attribute, Schema};
use crate::error::{ApiResult, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultState {
    #[serde(default)]
    pub id: String,
    pub organization_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `pending`, `synced`, or `failed`.
    pub sync_status: Option<String>,
    pub sync_error: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Vault;

#[async_trait]
impl ResourceKind for Vault {
    const KIND: &'static str = "vault";
    const IMPORT_FORMAT: &'static [&'static str] = &["org_id", "vault_id"];

    type State = VaultState;
    type Remote = models::Vault;
    type CreateBody = CreateVaultRequest;
    type UpdateBody = UpdateVaultRequest;

    fn schema() -> Schema {
        Schema::new(
            "Manages a vault. A vault is an isolated authorization data store \
             holding relationships and the policies evaluated against them.",
        )
        .attribute("id", Attribute::computed("Vault ID."))
        .attribute(
            "organization_id",
            Attribute::required("ID of the owning organization.").replace(),
        )
        .attribute("name", Attribute::required("Name of the vault."))
        .attribute("description", Attribute::optional("Description of the vault."))
        .attribute(
            "sync_status",
            Attribute::computed("Engine sync status: `pending`, `synced`, or `failed`."),
        )
        .attribute("sync_error", Attribute::computed("Last sync error, if any."))
        .attribute("created_at", Attribute::computed("Creation timestamp."))
    }

    fn create_body(plan: &VaultState) -> Result<CreateVaultRequest> {
        Ok(CreateVaultRequest {
            name: required(Self::KIND, "name", &plan.name)?.to_string(),
            description: or_empty(&plan.description),
        })
    }

    fn update_body(plan: &VaultState) -> Result<UpdateVaultRequest> {
        Ok(UpdateVaultRequest {
            name: required(Self::KIND, "name", &plan.name)?.to_string(),
            description: or_empty(&plan.description),
        })
    }

    fn apply(state: &mut VaultState, remote: models::Vault) {
        state.name = Some(remote.name);
        state.description = remote.description.filter(|d| !d.is_empty());
        state.sync_status = remote.sync_status.filter(|s| !s.is_empty());
        state.sync_error = remote.sync_error.filter(|e| !e.is_empty());
        state.created_at = non_empty(remote.created_at);
    }

    fn id(state: &VaultState) -> &str {
        &state.id
    }

    fn set_id(state: &mut VaultState, id: String) {
        state.id = id;
    }

    fn remote_id(remote: &models::Vault) -> String {
        remote.id.to_string()
    }

    fn from_import(segments: &[String]) -> VaultState {
        VaultState {
            organization_id: segments[0].clone(),
            id: segments[1].clone(),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &Client,
        plan: &VaultState,
        body: &CreateVaultRequest,
    ) -> ApiResult<models::Vault> {
        client.create_vault(&plan.organization_id, body).await
    }

    async fn fetch(&self, client: &Client, state: &VaultState) -> ApiResult<models::Vault> {
        client.get_vault(&state.organization_id, &state.id).await
    }

    async fn send_update(
        &self,
        client: &Client,
        state: &VaultState,
        body: &UpdateVaultRequest,
    ) -> ApiResult<models::Vault> {
        client
            .update_vault(&state.organization_id, &state.id, body)
            .await
    }

    async fn remove(&self, client: &Client, state: &VaultState) -> ApiResult<()> {
        client.delete_vault(&state.organization_id, &state.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SnowflakeId;

    #[test]
    fn test_from_import_sets_scope() {
        let state = Vault::from_import(&["1".to_string(), "2".to_string()]);
        assert_eq!(state.organization_id, "1");
        assert_eq!(state.id, "2");
        assert!(state.name.is_none());
    }

    #[test]
    fn test_apply_leaves_scope_alone() {
        let mut state = Vault::from_import(&["1".to_string(), "2".to_string()]);
        Vault::apply(
            &mut state,
            models::Vault {
                id: SnowflakeId::new("2"),
                organization_id: SnowflakeId::new("77"),
                name: "prod".to_string(),
                description: Some(String::new()),
                sync_status: Some("synced".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(state.organization_id, "1");
        assert_eq!(state.name.as_deref(), Some("prod"));
        assert!(state.description.is_none());
        assert_eq!(state.sync_status.as_deref(), Some("synced"));
    }

    #[test]
    fn test_organization_change_forces_replacement() {
        let schema = Vault::schema();
        let triggers: Vec<_> = schema.replacement_triggers().collect();
        assert_eq!(triggers, vec!["organization_id"]);
    }
}
