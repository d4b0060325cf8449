//! Client certificate endpoints.
//!
//! Certificates cannot be updated; the only mutations are create, revoke,
//! and delete.

use urlencoding::encode;

use super::models::{ClientCertificate, CreateCertificateRequest};
use super::Client;
use crate::error::ApiResult;

fn certificates_path(org_id: &str, client_id: &str) -> String {
    format!("/v1/organizations/{}/clients/{}/certificates", encode(org_id), encode(client_id))
}

fn certificate_path(org_id: &str, client_id: &str, cert_id: &str) -> String {
    format!("{}/{}", certificates_path(org_id, client_id), encode(cert_id))
}

impl Client {
    /// Generate a new Ed25519 certificate for a client.
    ///
    /// The response is the only place the private key ever appears.
    pub async fn create_certificate(
        &self,
        org_id: &str,
        client_id: &str,
        req: &CreateCertificateRequest,
    ) -> ApiResult<ClientCertificate> {
        self.post(&certificates_path(org_id, client_id), req)
            .await
            .map_err(|e| e.context("failed to create certificate"))
    }

    /// Fetch a certificate by ID. The private key is never included.
    pub async fn get_certificate(
        &self,
        org_id: &str,
        client_id: &str,
        cert_id: &str,
    ) -> ApiResult<ClientCertificate> {
        self.get(&certificate_path(org_id, client_id, cert_id))
            .await
            .map_err(|e| e.context("failed to get certificate"))
    }

    /// Permanently delete a certificate.
    pub async fn delete_certificate(
        &self,
        org_id: &str,
        client_id: &str,
        cert_id: &str,
    ) -> ApiResult<()> {
        self.delete(&certificate_path(org_id, client_id, cert_id))
            .await
            .map_err(|e| e.context("failed to delete certificate"))
    }

    /// Revoke a certificate, invalidating every token issued with it.
    pub async fn revoke_certificate(
        &self,
        org_id: &str,
        client_id: &str,
        cert_id: &str,
    ) -> ApiResult<()> {
        let path = format!("{}/revoke", certificate_path(org_id, client_id, cert_id));
        self.post_action(&path)
            .await
            .map_err(|e| e.context("failed to revoke certificate"))
    }
}
