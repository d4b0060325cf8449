//! Vault access grants: `inferadb_vault_user_grant` and
//! `inferadb_vault_team_grant`.
//!
//! Both share the same shape; only the grantee differs. The grantee and
//! the vault force replacement, the role is updated in place.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{non_empty, required, ResourceKind};
use crate::core::client::models::{
    self, CreateVaultTeamGrantRequest, CreateVaultUserGrantRequest, UpdateVaultGrantRequest,
    VaultRole,
};
use crate::core::client::Client;
use crate::core::schema::{Attribute, Schema};
use crate::error::{ApiResult, ResourceError, Result};

const GRANT_IMPORT_FORMAT: &[&str] = &["org_id", "vault_id", "grant_id"];
const VAULT_ROLES: &[&str] = &["reader", "writer", "manager", "admin"];

/// The planned role, which must be one this crate can send.
fn require_role(kind: &'static str, role: &Option<VaultRole>) -> Result<VaultRole> {
    match role {
        None => Err(ResourceError::MissingAttribute {
            kind,
            attribute: "role",
        }
        .into()),
        Some(VaultRole::Unrecognized(value)) => Err(ResourceError::InvalidAttribute {
            kind,
            attribute: "role",
            value: value.clone(),
            expected: VAULT_ROLES.join(", "),
        }
        .into()),
        Some(role) => Ok(role.clone()),
    }
}

fn grant_schema(description: &str, grantee: &'static str, grantee_doc: &str) -> Schema {
    Schema::new(description)
        .attribute("id", Attribute::computed("Grant ID."))
        .attribute(
            "organization_id",
            Attribute::required("ID of the owning organization.").replace(),
        )
        .attribute("vault_id", Attribute::required("ID of the vault.").replace())
        .attribute(grantee, Attribute::required(grantee_doc).replace())
        .attribute(
            "role",
            Attribute::required("Role on the vault: `reader`, `writer`, `manager`, or `admin`.")
                .one_of(VAULT_ROLES),
        )
        .attribute("granted_at", Attribute::computed("When the grant was made."))
        .attribute(
            "granted_by_user_id",
            Attribute::computed("ID of the user who made the grant."),
        )
}

// --- User grants ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGrantState {
    #[serde(default)]
    pub id: String,
    pub organization_id: String,
    pub vault_id: String,
    pub user_id: Option<String>,
    pub role: Option<VaultRole>,
    pub granted_at: Option<String>,
    pub granted_by_user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VaultUserGrant;

#[async_trait]
impl ResourceKind for VaultUserGrant {
    const KIND: &'static str = "vault_user_grant";
    const IMPORT_FORMAT: &'static [&'static str] = GRANT_IMPORT_FORMAT;

    type State = UserGrantState;
    type Remote = models::VaultUserGrant;
    type CreateBody = CreateVaultUserGrantRequest;
    type UpdateBody = UpdateVaultGrantRequest;

    fn schema() -> Schema {
        grant_schema(
            "Grants a user a role on a vault.",
            "user_id",
            "ID of the user receiving access.",
        )
    }

    fn create_body(plan: &UserGrantState) -> Result<CreateVaultUserGrantRequest> {
        Ok(CreateVaultUserGrantRequest {
            user_id: required(Self::KIND, "user_id", &plan.user_id)?.to_string(),
            role: require_role(Self::KIND, &plan.role)?,
        })
    }

    fn update_body(plan: &UserGrantState) -> Result<UpdateVaultGrantRequest> {
        Ok(UpdateVaultGrantRequest {
            role: require_role(Self::KIND, &plan.role)?,
        })
    }

    fn apply(state: &mut UserGrantState, remote: models::VaultUserGrant) {
        state.user_id = non_empty(remote.user_id.into_string()).or(state.user_id.take());
        state.role = Some(remote.role);
        state.granted_at = non_empty(remote.granted_at);
        state.granted_by_user_id = non_empty(remote.granted_by_user_id.into_string());
    }

    fn id(state: &UserGrantState) -> &str {
        &state.id
    }

    fn set_id(state: &mut UserGrantState, id: String) {
        state.id = id;
    }

    fn remote_id(remote: &models::VaultUserGrant) -> String {
        remote.id.to_string()
    }

    fn from_import(segments: &[String]) -> UserGrantState {
        UserGrantState {
            organization_id: segments[0].clone(),
            vault_id: segments[1].clone(),
            id: segments[2].clone(),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &Client,
        plan: &UserGrantState,
        body: &CreateVaultUserGrantRequest,
    ) -> ApiResult<models::VaultUserGrant> {
        client
            .create_vault_user_grant(&plan.organization_id, &plan.vault_id, body)
            .await
    }

    async fn fetch(
        &self,
        client: &Client,
        state: &UserGrantState,
    ) -> ApiResult<models::VaultUserGrant> {
        client
            .get_vault_user_grant(&state.organization_id, &state.vault_id, &state.id)
            .await
    }

    async fn send_update(
        &self,
        client: &Client,
        state: &UserGrantState,
        body: &UpdateVaultGrantRequest,
    ) -> ApiResult<models::VaultUserGrant> {
        client
            .update_vault_user_grant(&state.organization_id, &state.vault_id, &state.id, body)
            .await
    }

    async fn remove(&self, client: &Client, state: &UserGrantState) -> ApiResult<()> {
        client
            .delete_vault_user_grant(&state.organization_id, &state.vault_id, &state.id)
            .await
    }
}

// --- Team grants ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGrantState {
    #[serde(default)]
    pub id: String,
    pub organization_id: String,
    pub vault_id: String,
    pub team_id: Option<String>,
    pub role: Option<VaultRole>,
    pub granted_at: Option<String>,
    pub granted_by_user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VaultTeamGrant;

#[async_trait]
impl ResourceKind for VaultTeamGrant {
    const KIND: &'static str = "vault_team_grant";
    const IMPORT_FORMAT: &'static [&'static str] = GRANT_IMPORT_FORMAT;

    type State = TeamGrantState;
    type Remote = models::VaultTeamGrant;
    type CreateBody = CreateVaultTeamGrantRequest;
    type UpdateBody = UpdateVaultGrantRequest;

    fn schema() -> Schema {
        grant_schema(
            "Grants every member of a team a role on a vault.",
            "team_id",
            "ID of the team receiving access.",
        )
    }

    fn create_body(plan: &TeamGrantState) -> Result<CreateVaultTeamGrantRequest> {
        Ok(CreateVaultTeamGrantRequest {
            team_id: required(Self::KIND, "team_id", &plan.team_id)?.to_string(),
            role: require_role(Self::KIND, &plan.role)?,
        })
    }

    fn update_body(plan: &TeamGrantState) -> Result<UpdateVaultGrantRequest> {
        Ok(UpdateVaultGrantRequest {
            role: require_role(Self::KIND, &plan.role)?,
        })
    }

    fn apply(state: &mut TeamGrantState, remote: models::VaultTeamGrant) {
        state.team_id = non_empty(remote.team_id.into_string()).or(state.team_id.take());
        state.role = Some(remote.role);
        state.granted_at = non_empty(remote.granted_at);
        state.granted_by_user_id = non_empty(remote.granted_by_user_id.into_string());
    }

    fn id(state: &TeamGrantState) -> &str {
        &state.id
    }

    fn set_id(state: &mut TeamGrantState, id: String) {
        state.id = id;
    }

    fn remote_id(remote: &models::VaultTeamGrant) -> String {
        remote.id.to_string()
    }

    fn from_import(segments: &[String]) -> TeamGrantState {
        TeamGrantState {
            organization_id: segments[0].clone(),
            vault_id: segments[1].clone(),
            id: segments[2].clone(),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &Client,
        plan: &TeamGrantState,
        body: &CreateVaultTeamGrantRequest,
    ) -> ApiResult<models::VaultTeamGrant> {
        client
            .create_vault_team_grant(&plan.organization_id, &plan.vault_id, body)
            .await
    }

    async fn fetch(
        &self,
        client: &Client,
        state: &TeamGrantState,
    ) -> ApiResult<models::VaultTeamGrant> {
        client
            .get_vault_team_grant(&state.organization_id, &state.vault_id, &state.id)
            .await
    }

    async fn send_update(
        &self,
        client: &Client,
        state: &TeamGrantState,
        body: &UpdateVaultGrantRequest,
    ) -> ApiResult<models::VaultTeamGrant> {
        client
            .update_vault_team_grant(&state.organization_id, &state.vault_id, &state.id, body)
            .await
    }

    async fn remove(&self, client: &Client, state: &TeamGrantState) -> ApiResult<()> {
        client
            .delete_vault_team_grant(&state.organization_id, &state.vault_id, &state.id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_schemas_differ_only_in_grantee() {
        let user = VaultUserGrant::schema();
        let team = VaultTeamGrant::schema();
        assert!(user.get("user_id").unwrap().requires_replace);
        assert!(team.get("team_id").unwrap().requires_replace);
        assert!(user.get("team_id").is_none());
        assert!(!user.get("role").unwrap().requires_replace);
    }

    #[test]
    fn test_update_body_carries_role_only() {
        let plan = UserGrantState {
            organization_id: "1".into(),
            vault_id: "2".into(),
            user_id: Some("3".into()),
            role: Some(VaultRole::Writer),
            ..Default::default()
        };
        let body = VaultUserGrant::update_body(&plan).unwrap();
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"role":"writer"}"#
        );
    }

    #[test]
    fn test_unrecognized_role_cannot_be_planned() {
        let plan = TeamGrantState {
            organization_id: "1".into(),
            vault_id: "2".into(),
            team_id: Some("3".into()),
            role: Some(VaultRole::Unrecognized("auditor".into())),
            ..Default::default()
        };
        let err = VaultTeamGrant::create_body(&plan).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Resource(ResourceError::InvalidAttribute {
                kind: "vault_team_grant",
                attribute: "role",
                ..
            })
        ));
    }

    #[test]
    fn test_team_grant_from_import() {
        let state = VaultTeamGrant::from_import(&["1".into(), "2".into(), "3".into()]);
        assert_eq!(state.vault_id, "2");
        assert_eq!(state.id, "3");
        assert!(state.team_id.is_none());
    }
}
