//! Vault endpoints.
//!
//! Create and update wrap the vault in `{"vault": ...}`; GET returns it bare.

use urlencoding::encode;

use super::models::{CreateVaultRequest, UpdateVaultRequest, Vault, VaultEnvelope};
use super::Client;
use crate::error::ApiResult;

fn vaults_path(org_id: &str) -> String {
    format!("/v1/organizations/{}/vaults", encode(org_id))
}

fn vault_path(org_id: &str, vault_id: &str) -> String {
    format!("/v1/organizations/{}/vaults/{}", encode(org_id), encode(vault_id))
}

impl Client {
    /// Create a vault in an organization.
    pub async fn create_vault(&self, org_id: &str, req: &CreateVaultRequest) -> ApiResult<Vault> {
        self.post::<VaultEnvelope, _>(&vaults_path(org_id), req)
            .await
            .map(|resp| resp.vault)
            .map_err(|e| e.context("failed to create vault"))
    }

    /// Fetch a vault by ID.
    pub async fn get_vault(&self, org_id: &str, vault_id: &str) -> ApiResult<Vault> {
        self.get(&vault_path(org_id, vault_id))
            .await
            .map_err(|e| e.context("failed to get vault"))
    }

    /// Update a vault's name or description.
    pub async fn update_vault(
        &self,
        org_id: &str,
        vault_id: &str,
        req: &UpdateVaultRequest,
    ) -> ApiResult<Vault> {
        self.patch::<VaultEnvelope, _>(&vault_path(org_id, vault_id), req)
            .await
            .map(|resp| resp.vault)
            .map_err(|e| e.context("failed to update vault"))
    }

    /// Delete a vault. Deletion is soft on the server side.
    pub async fn delete_vault(&self, org_id: &str, vault_id: &str) -> ApiResult<()> {
        self.delete(&vault_path(org_id, vault_id))
            .await
            .map_err(|e| e.context("failed to delete vault"))
    }
}
