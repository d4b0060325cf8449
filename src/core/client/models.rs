//! Wire models for the Control API.
//!
//! Response types are lenient: anything the server may omit defaults, and
//! every identifier goes through [`SnowflakeId`]. Request types skip empty
//! optional fields so PATCH bodies only carry what the caller set.

use serde::{Deserialize, Serialize};

use crate::core::types::SnowflakeId;

/// Role of a user within a team.
///
/// Roles the server reports but this crate does not know are kept verbatim
/// in `Unrecognized` so a refresh never fails on them. Plans may not use
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Maintainer,
    Member,
    #[serde(untagged)]
    Unrecognized(String),
}

/// Role granted on a vault. Unknown wire values land in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaultRole {
    Reader,
    Writer,
    Manager,
    Admin,
    #[serde(untagged)]
    Unrecognized(String),
}

// --- Organizations ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Organization {
    pub id: SnowflakeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub suspended_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
    /// Caller's role in the organization.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrganizationEnvelope {
    pub organization: Organization,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tier: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrganizationRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tier: String,
}

// --- Vaults ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Vault {
    pub id: SnowflakeId,
    #[serde(default)]
    pub organization_id: SnowflakeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sync_status: Option<String>,
    #[serde(default)]
    pub sync_error: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VaultEnvelope {
    pub vault: Vault,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateVaultRequest {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateVaultRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

// --- Clients ---

/// A backend service identity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceClient {
    pub id: SnowflakeId,
    #[serde(default)]
    pub organization_id: SnowflakeId,
    #[serde(default)]
    pub vault_id: SnowflakeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClientEnvelope {
    pub client: ServiceClient,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub vault_id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vault_id: String,
}

// --- Certificates ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientCertificate {
    pub id: SnowflakeId,
    #[serde(default)]
    pub client_id: SnowflakeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kid: String,
    #[serde(default)]
    pub public_key_pem: String,
    /// Only present in the create response.
    #[serde(default)]
    pub private_key_pem: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub revoked_at: Option<String>,
    #[serde(default)]
    pub revoked_by_user_id: Option<SnowflakeId>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCertificateRequest {
    pub name: String,
}

// --- Teams ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Team {
    pub id: SnowflakeId,
    #[serde(default)]
    pub organization_id: SnowflakeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamEnvelope {
    pub team: Team,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTeamRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMember {
    pub id: SnowflakeId,
    #[serde(default)]
    pub team_id: SnowflakeId,
    #[serde(default)]
    pub user_id: SnowflakeId,
    pub role: TeamRole,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTeamMemberRequest {
    pub user_id: String,
    pub role: TeamRole,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateTeamMemberRequest {
    pub role: TeamRole,
}

// --- Vault grants ---

#[derive(Debug, Clone, Deserialize)]
pub struct VaultUserGrant {
    pub id: SnowflakeId,
    #[serde(default)]
    pub vault_id: SnowflakeId,
    #[serde(default)]
    pub user_id: SnowflakeId,
    pub role: VaultRole,
    #[serde(default)]
    pub granted_at: String,
    #[serde(default)]
    pub granted_by_user_id: SnowflakeId,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateVaultUserGrantRequest {
    pub user_id: String,
    pub role: VaultRole,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VaultTeamGrant {
    pub id: SnowflakeId,
    #[serde(default)]
    pub vault_id: SnowflakeId,
    #[serde(default)]
    pub team_id: SnowflakeId,
    pub role: VaultRole,
    #[serde(default)]
    pub granted_at: String,
    #[serde(default)]
    pub granted_by_user_id: SnowflakeId,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateVaultTeamGrantRequest {
    pub team_id: String,
    pub role: VaultRole,
}

/// Role change for either grant variant.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateVaultGrantRequest {
    pub role: VaultRole,
}
