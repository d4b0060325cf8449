//! `inferadb_client_certificate`: Ed25519 key pair for a client.
//!
//! Certificates are immutable. The private key is revealed once, in the
//! create response, and must survive every later read.

use std::convert::Infallible;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{non_empty, required, ResourceKind};
use crate::core::client::models::{self, CreateCertificateRequest};
use crate::core::client::Client;
use crate::core::schema::{Attribute, Schema};
use crate::error::{ApiResult, ResourceError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateState {
    #[serde(default)]
    pub id: String,
    pub organization_id: String,
    pub client_id: String,
    pub name: Option<String>,
    /// Key ID used in JWT headers.
    pub kid: Option<String>,
    pub public_key_pem: Option<String>,
    pub private_key_pem: Option<String>,
    pub is_active: Option<bool>,
    pub revoked_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Certificate;

#[async_trait]
impl ResourceKind for Certificate {
    const KIND: &'static str = "client_certificate";
    const IMPORT_FORMAT: &'static [&'static str] = &["org_id", "client_id", "cert_id"];
    const FULLY_IMMUTABLE: bool = true;

    type State = CertificateState;
    type Remote = models::ClientCertificate;
    type CreateBody = CreateCertificateRequest;
    type UpdateBody = Infallible;

    fn schema() -> Schema {
        Schema::new(
            "Manages a client certificate. The private key is only returned when the \
             certificate is created; any change replaces the certificate.",
        )
        .attribute("id", Attribute::computed("Certificate ID."))
        .attribute(
            "organization_id",
            Attribute::required("ID of the owning organization.").replace(),
        )
        .attribute(
            "client_id",
            Attribute::required("ID of the client the certificate belongs to.").replace(),
        )
        .attribute(
            "name",
            Attribute::required("Name of the certificate.").replace(),
        )
        .attribute("kid", Attribute::computed("Key ID used in JWT headers."))
        .attribute(
            "public_key_pem",
            Attribute::computed("Public key in PEM format."),
        )
        .attribute(
            "private_key_pem",
            Attribute::computed("Private key in PEM format. Only available after creation.")
                .sensitive(),
        )
        .attribute(
            "is_active",
            Attribute::computed_bool("Whether the certificate is active."),
        )
        .attribute("revoked_at", Attribute::computed("Revocation timestamp, if revoked."))
        .attribute("created_at", Attribute::computed("Creation timestamp."))
    }

    fn create_body(plan: &CertificateState) -> Result<CreateCertificateRequest> {
        Ok(CreateCertificateRequest {
            name: required(Self::KIND, "name", &plan.name)?.to_string(),
        })
    }

    fn update_body(_plan: &CertificateState) -> Result<Infallible> {
        Err(ResourceError::ImmutableUpdate { kind: Self::KIND }.into())
    }

    fn apply(state: &mut CertificateState, remote: models::ClientCertificate) {
        state.name = Some(remote.name);
        state.kid = non_empty(remote.kid);
        state.public_key_pem = non_empty(remote.public_key_pem);
        if let Some(key) = remote.private_key_pem.filter(|k| !k.is_empty()) {
            state.private_key_pem = Some(key);
        }
        state.is_active = Some(remote.is_active);
        state.revoked_at = remote.revoked_at;
        state.created_at = non_empty(remote.created_at);
    }

    fn id(state: &CertificateState) -> &str {
        &state.id
    }

    fn set_id(state: &mut CertificateState, id: String) {
        state.id = id;
    }

    fn remote_id(remote: &models::ClientCertificate) -> String {
        remote.id.to_string()
    }

    fn from_import(segments: &[String]) -> CertificateState {
        CertificateState {
            organization_id: segments[0].clone(),
            client_id: segments[1].clone(),
            id: segments[2].clone(),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &Client,
        plan: &CertificateState,
        body: &CreateCertificateRequest,
    ) -> ApiResult<models::ClientCertificate> {
        client
            .create_certificate(&plan.organization_id, &plan.client_id, body)
            .await
    }

    async fn fetch(
        &self,
        client: &Client,
        state: &CertificateState,
    ) -> ApiResult<models::ClientCertificate> {
        client
            .get_certificate(&state.organization_id, &state.client_id, &state.id)
            .await
    }

    async fn send_update(
        &self,
        _client: &Client,
        _state: &CertificateState,
        body: &Infallible,
    ) -> ApiResult<models::ClientCertificate> {
        match *body {}
    }

    async fn remove(&self, client: &Client, state: &CertificateState) -> ApiResult<()> {
        client
            .delete_certificate(&state.organization_id, &state.client_id, &state.id)
            .await
    }
}
