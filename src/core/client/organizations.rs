//! Organization endpoints.

use urlencoding::encode;

use super::models::{
    CreateOrganizationRequest, Organization, OrganizationEnvelope, UpdateOrganizationRequest,
};
use super::Client;
use crate::error::ApiResult;

fn organization_path(org_id: &str) -> String {
    format!("/v1/organizations/{}", encode(org_id))
}

impl Client {
    /// Create an organization.
    ///
    /// The returned tier is in wire form (`TIER_DEV_V1`).
    pub async fn create_organization(
        &self,
        req: &CreateOrganizationRequest,
    ) -> ApiResult<Organization> {
        self.post::<OrganizationEnvelope, _>("/v1/organizations", req)
            .await
            .map(|resp| resp.organization)
            .map_err(|e| e.context("failed to create organization"))
    }

    /// Fetch an organization by ID.
    pub async fn get_organization(&self, org_id: &str) -> ApiResult<Organization> {
        self.get::<OrganizationEnvelope>(&organization_path(org_id))
            .await
            .map(|resp| resp.organization)
            .map_err(|e| e.context("failed to get organization"))
    }

    /// Update an organization's name or tier.
    pub async fn update_organization(
        &self,
        org_id: &str,
        req: &UpdateOrganizationRequest,
    ) -> ApiResult<Organization> {
        self.patch::<OrganizationEnvelope, _>(&organization_path(org_id), req)
            .await
            .map(|resp| resp.organization)
            .map_err(|e| e.context("failed to update organization"))
    }

    /// Delete an organization.
    pub async fn delete_organization(&self, org_id: &str) -> ApiResult<()> {
        self.delete(&organization_path(org_id))
            .await
            .map_err(|e| e.context("failed to delete organization"))
    }
}
