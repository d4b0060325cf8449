//! One-off actions that are not part of a resource lifecycle.

use crate::cli::output;
use crate::core::provider::Provider;
use crate::core::resource::parse_import_id;
use crate::error::Result;

/// Deactivate a client given `<org_id>/<client_id>`.
pub async fn deactivate_client(provider: &Provider, id: &str) -> Result<()> {
    let parts = parse_import_id("client", &["org_id", "client_id"], id)?;
    provider
        .client()
        .deactivate_client(&parts[0], &parts[1])
        .await?;
    output::success(&format!("client {} deactivated", parts[1]));
    Ok(())
}

/// Revoke a certificate given `<org_id>/<client_id>/<cert_id>`.
pub async fn revoke_certificate(provider: &Provider, id: &str) -> Result<()> {
    let parts = parse_import_id("client_certificate", &["org_id", "client_id", "cert_id"], id)?;
    provider
        .client()
        .revoke_certificate(&parts[0], &parts[1], &parts[2])
        .await?;
    output::success(&format!("certificate {} revoked", parts[2]));
    Ok(())
}
