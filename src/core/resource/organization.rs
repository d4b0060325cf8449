//! `inferadb_organization`: top-level tenant.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{non_empty, required, ResourceKind};
use crate::core::client::models::{self, CreateOrganizationRequest, UpdateOrganizationRequest};
use crate::core::client::Client;
use crate::core::constants::DEFAULT_TIER;
use crate::core::schema::{Attribute, Schema};
use crate::error::{ApiResult, Result};

const TIERS: &[&str] = &["dev", "pro", "max"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationState {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    /// Short tier name: `dev`, `pro`, or `max`.
    pub tier: Option<String>,
    pub created_at: Option<String>,
    pub suspended_at: Option<String>,
    pub deleted_at: Option<String>,
}

/// Map the API's tier enum to the short form users write.
///
/// `TIER_DEV_V1` becomes `dev`; unknown `TIER_<X>_V1` values become `<x>`;
/// anything else is returned unchanged.
pub fn normalize_tier(tier: &str) -> String {
    match tier {
        "TIER_DEV_V1" => "dev".to_string(),
        "TIER_PRO_V1" => "pro".to_string(),
        "TIER_MAX_V1" => "max".to_string(),
        other => match other
            .strip_prefix("TIER_")
            .and_then(|rest| rest.strip_suffix("_V1"))
        {
            Some(name) => name.to_lowercase(),
            None => other.to_string(),
        },
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Organization;

#[async_trait]
impl ResourceKind for Organization {
    const KIND: &'static str = "organization";
    const IMPORT_FORMAT: &'static [&'static str] = &["org_id"];

    type State = OrganizationState;
    type Remote = models::Organization;
    type CreateBody = CreateOrganizationRequest;
    type UpdateBody = UpdateOrganizationRequest;

    fn schema() -> Schema {
        Schema::new(
            "Manages an InferaDB organization. Organizations own vaults, teams, and clients; \
             the tier determines the feature set and limits.",
        )
        .attribute("id", Attribute::computed("Organization ID."))
        .attribute("name", Attribute::required("Name of the organization."))
        .attribute(
            "tier",
            Attribute::optional_computed("Tier of the organization: `dev`, `pro`, or `max`.")
                .default_value(DEFAULT_TIER)
                .one_of(TIERS),
        )
        .attribute("created_at", Attribute::computed("Creation timestamp."))
        .attribute(
            "suspended_at",
            Attribute::computed("Suspension timestamp, if suspended."),
        )
        .attribute("deleted_at", Attribute::computed("Deletion timestamp, if deleted."))
    }

    fn create_body(plan: &OrganizationState) -> Result<CreateOrganizationRequest> {
        Ok(CreateOrganizationRequest {
            name: required(Self::KIND, "name", &plan.name)?.to_string(),
            tier: plan
                .tier
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TIER.to_string()),
        })
    }

    fn update_body(plan: &OrganizationState) -> Result<UpdateOrganizationRequest> {
        Ok(UpdateOrganizationRequest {
            name: required(Self::KIND, "name", &plan.name)?.to_string(),
            tier: plan.tier.clone().unwrap_or_default(),
        })
    }

    fn apply(state: &mut OrganizationState, remote: models::Organization) {
        state.name = Some(remote.name);
        state.tier = non_empty(normalize_tier(&remote.tier)).or(state.tier.take());
        state.created_at = non_empty(remote.created_at);
        state.suspended_at = remote.suspended_at;
        state.deleted_at = remote.deleted_at;
    }

    fn id(state: &OrganizationState) -> &str {
        &state.id
    }

    fn set_id(state: &mut OrganizationState, id: String) {
        state.id = id;
    }

    fn remote_id(remote: &models::Organization) -> String {
        remote.id.to_string()
    }

    fn from_import(segments: &[String]) -> OrganizationState {
        OrganizationState {
            id: segments[0].clone(),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &Client,
        _plan: &OrganizationState,
        body: &CreateOrganizationRequest,
    ) -> ApiResult<models::Organization> {
        client.create_organization(body).await
    }

    async fn fetch(
        &self,
        client: &Client,
        state: &OrganizationState,
    ) -> ApiResult<models::Organization> {
        client.get_organization(&state.id).await
    }

    async fn send_update(
        &self,
        client: &Client,
        state: &OrganizationState,
        body: &UpdateOrganizationRequest,
    ) -> ApiResult<models::Organization> {
        client.update_organization(&state.id, body).await
    }

    async fn remove(&self, client: &Client, state: &OrganizationState) -> ApiResult<()> {
        client.delete_organization(&state.id).await
    }
}
