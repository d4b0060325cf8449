//! Client (service identity) endpoints.

use urlencoding::encode;

use super::models::{ClientEnvelope, CreateClientRequest, ServiceClient, UpdateClientRequest};
use super::Client;
use crate::error::ApiResult;

fn clients_path(org_id: &str) -> String {
    format!("/v1/organizations/{}/clients", encode(org_id))
}

fn client_path(org_id: &str, client_id: &str) -> String {
    format!("/v1/organizations/{}/clients/{}", encode(org_id), encode(client_id))
}

impl Client {
    /// Create a service client in an organization.
    pub async fn create_client(
        &self,
        org_id: &str,
        req: &CreateClientRequest,
    ) -> ApiResult<ServiceClient> {
        self.post::<ClientEnvelope, _>(&clients_path(org_id), req)
            .await
            .map(|resp| resp.client)
            .map_err(|e| e.context("failed to create client"))
    }

    /// Fetch a service client by ID.
    pub async fn get_client(&self, org_id: &str, client_id: &str) -> ApiResult<ServiceClient> {
        self.get::<ClientEnvelope>(&client_path(org_id, client_id))
            .await
            .map(|resp| resp.client)
            .map_err(|e| e.context("failed to get client"))
    }

    /// Update a service client's name or default vault.
    pub async fn update_client(
        &self,
        org_id: &str,
        client_id: &str,
        req: &UpdateClientRequest,
    ) -> ApiResult<ServiceClient> {
        self.patch::<ClientEnvelope, _>(&client_path(org_id, client_id), req)
            .await
            .map(|resp| resp.client)
            .map_err(|e| e.context("failed to update client"))
    }

    /// Delete a service client.
    pub async fn delete_client(&self, org_id: &str, client_id: &str) -> ApiResult<()> {
        self.delete(&client_path(org_id, client_id))
            .await
            .map_err(|e| e.context("failed to delete client"))
    }

    /// Deactivate a service client.
    ///
    /// Revokes every certificate and token issued to the client but keeps
    /// the client record.
    pub async fn deactivate_client(&self, org_id: &str, client_id: &str) -> ApiResult<()> {
        let path = format!("{}/deactivate", client_path(org_id, client_id));
        self.post_action(&path)
            .await
            .map_err(|e| e.context("failed to deactivate client"))
    }
}
