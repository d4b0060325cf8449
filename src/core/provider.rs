//! Provider: the registry of resources and data sources a host can use.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::core::client::Client;
use crate::core::config::ProviderConfig;
use crate::core::constants::PROVIDER_TYPE_NAME;
use crate::core::data_source::{DataSource, DataSourceHandler};
use crate::core::resource::{
    Certificate, Lifecycle, Organization, ResourceHandler, ServiceClient, Team, TeamMember, Vault,
    VaultTeamGrant, VaultUserGrant,
};
use crate::core::schema::{provider_schema, Schema};
use crate::error::{ResourceError, Result};

/// Every schema the provider declares, keyed by full type name.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSchema {
    pub provider: Schema,
    pub resources: BTreeMap<String, Schema>,
    pub data_sources: BTreeMap<String, Schema>,
}

/// Registry of resource and data-source handlers sharing one client.
pub struct Provider {
    client: Client,
    resources: BTreeMap<String, Arc<dyn ResourceHandler>>,
    data_sources: BTreeMap<String, Arc<dyn DataSourceHandler>>,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("client", &self.client)
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("data_sources", &self.data_sources.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Provider {
    /// Register every resource and data source against `client`.
    pub fn new(client: Client) -> Self {
        let resources: Vec<Arc<dyn ResourceHandler>> = vec![
            Arc::new(Lifecycle::new(client.clone(), Organization)),
            Arc::new(Lifecycle::new(client.clone(), Vault)),
            Arc::new(Lifecycle::new(client.clone(), ServiceClient)),
            Arc::new(Lifecycle::new(client.clone(), Certificate)),
            Arc::new(Lifecycle::new(client.clone(), Team)),
            Arc::new(Lifecycle::new(client.clone(), TeamMember)),
            Arc::new(Lifecycle::new(client.clone(), VaultUserGrant)),
            Arc::new(Lifecycle::new(client.clone(), VaultTeamGrant)),
        ];
        let data_sources: Vec<Arc<dyn DataSourceHandler>> = vec![
            Arc::new(DataSource::new(client.clone(), Organization)),
            Arc::new(DataSource::new(client.clone(), Vault)),
            Arc::new(DataSource::new(client.clone(), ServiceClient)),
            Arc::new(DataSource::new(client.clone(), Team)),
        ];

        Self {
            client,
            resources: resources
                .into_iter()
                .map(|handler| (handler.type_name(), handler))
                .collect(),
            data_sources: data_sources
                .into_iter()
                .map(|handler| (handler.type_name(), handler))
                .collect(),
        }
    }

    /// Resolve `config` against the environment and build a provider.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the session token is missing, the endpoint
    /// is invalid, or the HTTP client cannot be built.
    pub fn configure(config: &ProviderConfig) -> Result<Self> {
        let settings = config.resolve()?;
        let client = Client::from_settings(&settings)?;
        debug!(endpoint = %client.base_url(), "provider configured");
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Look up a resource by `vault` or `inferadb_vault`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::UnknownType` for unregistered names.
    pub fn resource(&self, name: &str) -> Result<Arc<dyn ResourceHandler>> {
        self.resources
            .get(&qualify(name))
            .cloned()
            .ok_or_else(|| unknown("resource", name))
    }

    /// Look up a data source by `vault` or `inferadb_vault`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::UnknownType` for unregistered names.
    pub fn data_source(&self, name: &str) -> Result<Arc<dyn DataSourceHandler>> {
        self.data_sources
            .get(&qualify(name))
            .cloned()
            .ok_or_else(|| unknown("data source", name))
    }

    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn data_source_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }

    pub fn schema(&self) -> ProviderSchema {
        ProviderSchema {
            provider: provider_schema(),
            resources: self
                .resources
                .iter()
                .map(|(name, handler)| (name.clone(), handler.schema()))
                .collect(),
            data_sources: self
                .data_sources
                .iter()
                .map(|(name, handler)| (name.clone(), handler.schema()))
                .collect(),
        }
    }
}

/// Prefix a short type name with the provider name.
fn qualify(name: &str) -> String {
    let prefix = format!("{PROVIDER_TYPE_NAME}_");
    if name.starts_with(&prefix) {
        name.to_string()
    } else {
        format!("{prefix}{name}")
    }
}

fn unknown(category: &'static str, name: &str) -> crate::error::Error {
    ResourceError::UnknownType {
        category,
        name: name.to_string(),
    }
    .into()
}
