//! Vault access grant endpoints, for users and for teams.

use urlencoding::encode;

use super::models::{
    CreateVaultTeamGrantRequest, CreateVaultUserGrantRequest, UpdateVaultGrantRequest,
    VaultTeamGrant, VaultUserGrant,
};
use super::Client;
use crate::error::ApiResult;

fn grants_path(org_id: &str, vault_id: &str, collection: &str) -> String {
    format!("/v1/organizations/{}/vaults/{}/{collection}", encode(org_id), encode(vault_id))
}

fn grant_path(org_id: &str, vault_id: &str, collection: &str, grant_id: &str) -> String {
    format!("{}/{}", grants_path(org_id, vault_id, collection), encode(grant_id))
}

const USER_GRANTS: &str = "user-grants";
const TEAM_GRANTS: &str = "team-grants";

impl Client {
    /// Grant a user a role on a vault.
    pub async fn create_vault_user_grant(
        &self,
        org_id: &str,
        vault_id: &str,
        req: &CreateVaultUserGrantRequest,
    ) -> ApiResult<VaultUserGrant> {
        self.post(&grants_path(org_id, vault_id, USER_GRANTS), req)
            .await
            .map_err(|e| e.context("failed to create user grant"))
    }

    pub async fn get_vault_user_grant(
        &self,
        org_id: &str,
        vault_id: &str,
        grant_id: &str,
    ) -> ApiResult<VaultUserGrant> {
        self.get(&grant_path(org_id, vault_id, USER_GRANTS, grant_id))
            .await
            .map_err(|e| e.context("failed to get user grant"))
    }

    pub async fn update_vault_user_grant(
        &self,
        org_id: &str,
        vault_id: &str,
        grant_id: &str,
        req: &UpdateVaultGrantRequest,
    ) -> ApiResult<VaultUserGrant> {
        self.patch(&grant_path(org_id, vault_id, USER_GRANTS, grant_id), req)
            .await
            .map_err(|e| e.context("failed to update user grant"))
    }

    /// Revoke a user's access to a vault.
    pub async fn delete_vault_user_grant(
        &self,
        org_id: &str,
        vault_id: &str,
        grant_id: &str,
    ) -> ApiResult<()> {
        self.delete(&grant_path(org_id, vault_id, USER_GRANTS, grant_id))
            .await
            .map_err(|e| e.context("failed to delete user grant"))
    }

    /// Grant a team a role on a vault.
    pub async fn create_vault_team_grant(
        &self,
        org_id: &str,
        vault_id: &str,
        req: &CreateVaultTeamGrantRequest,
    ) -> ApiResult<VaultTeamGrant> {
        self.post(&grants_path(org_id, vault_id, TEAM_GRANTS), req)
            .await
            .map_err(|e| e.context("failed to create team grant"))
    }

    pub async fn get_vault_team_grant(
        &self,
        org_id: &str,
        vault_id: &str,
        grant_id: &str,
    ) -> ApiResult<VaultTeamGrant> {
        self.get(&grant_path(org_id, vault_id, TEAM_GRANTS, grant_id))
            .await
            .map_err(|e| e.context("failed to get team grant"))
    }

    pub async fn update_vault_team_grant(
        &self,
        org_id: &str,
        vault_id: &str,
        grant_id: &str,
        req: &UpdateVaultGrantRequest,
    ) -> ApiResult<VaultTeamGrant> {
        self.patch(&grant_path(org_id, vault_id, TEAM_GRANTS, grant_id), req)
            .await
            .map_err(|e| e.context("failed to update team grant"))
    }

    /// Revoke a team's access to a vault.
    pub async fn delete_vault_team_grant(
        &self,
        org_id: &str,
        vault_id: &str,
        grant_id: &str,
    ) -> ApiResult<()> {
        self.delete(&grant_path(org_id, vault_id, TEAM_GRANTS, grant_id))
            .await
            .map_err(|e| e.context("failed to delete team grant"))
    }
}
