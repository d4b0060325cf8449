//! Read-only data sources.
//!
//! A data source looks up an existing entity by its keys and fills in the
//! rest. Unlike a resource read, a missing entity is an error: the user
//! asked for something that does not exist.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::client::Client;
use crate::core::constants::PROVIDER_TYPE_NAME;
use crate::core::resource::{
    handler, Organization, ResourceKind, ServiceClient, Team, Vault,
};
use crate::core::schema::{Attribute, AttributeMode, Schema};
use crate::error::{Operation, ResourceError, Result};

/// A resource kind that can also be looked up read-only.
pub trait Lookup: ResourceKind {
    /// Attributes the user supplies to find the entity.
    const LOOKUP_KEYS: &'static [&'static str];

    const LOOKUP_DESCRIPTION: &'static str;

    /// Resource schema with lookup keys required and everything else
    /// computed.
    fn lookup_schema() -> Schema {
        let mut schema = Self::schema();
        schema.description = Self::LOOKUP_DESCRIPTION.to_string();
        for (name, attr) in schema.attributes.iter_mut() {
            *attr = if Self::LOOKUP_KEYS.contains(name) {
                Attribute {
                    mode: AttributeMode::Required,
                    requires_replace: false,
                    default: None,
                    allowed_values: Vec::new(),
                    ..attr.clone()
                }
            } else {
                Attribute {
                    mode: AttributeMode::Computed,
                    requires_replace: false,
                    default: None,
                    ..attr.clone()
                }
            };
        }
        schema
    }
}

impl Lookup for Organization {
    const LOOKUP_KEYS: &'static [&'static str] = &["id"];
    const LOOKUP_DESCRIPTION: &'static str = "Looks up an existing organization by ID.";
}

impl Lookup for Vault {
    const LOOKUP_KEYS: &'static [&'static str] = &["organization_id", "id"];
    const LOOKUP_DESCRIPTION: &'static str = "Looks up an existing vault by organization and ID.";
}

impl Lookup for ServiceClient {
    const LOOKUP_KEYS: &'static [&'static str] = &["organization_id", "id"];
    const LOOKUP_DESCRIPTION: &'static str = "Looks up an existing client by organization and ID.";
}

impl Lookup for Team {
    const LOOKUP_KEYS: &'static [&'static str] = &["organization_id", "id"];
    const LOOKUP_DESCRIPTION: &'static str = "Looks up an existing team by organization and ID.";
}

/// Data source for one lookup kind.
#[derive(Debug, Clone)]
pub struct DataSource<R> {
    client: Client,
    kind: R,
}

impl<R: Lookup> DataSource<R> {
    pub fn new(client: Client, kind: R) -> Self {
        Self { client, kind }
    }

    /// Fetch the entity named by `config` and fill every computed field.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::NotFound` when the API answers 404, and
    /// `ResourceError::Operation` for any other API failure.
    pub async fn read(&self, config: R::State) -> Result<R::State> {
        let id = R::id(&config).to_string();
        if id.is_empty() {
            return Err(ResourceError::MissingAttribute {
                kind: R::KIND,
                attribute: "id",
            }
            .into());
        }
        debug!(kind = R::KIND, id = %id, "looking up data source");

        match self.kind.fetch(&self.client, &config).await {
            Ok(remote) => {
                let mut state = config;
                R::apply(&mut state, remote);
                Ok(state)
            }
            Err(err) if err.is_not_found() => Err(ResourceError::NotFound { kind: R::KIND, id }.into()),
            Err(source) => Err(ResourceError::Operation {
                operation: Operation::Read,
                kind: R::KIND,
                id: Some(id),
                source,
            }
            .into()),
        }
    }
}

/// Type-erased data source operating on JSON documents.
#[async_trait]
pub trait DataSourceHandler: Send + Sync {
    fn kind(&self) -> &'static str;

    fn type_name(&self) -> String {
        format!("{}_{}", PROVIDER_TYPE_NAME, self.kind())
    }

    fn schema(&self) -> Schema;

    async fn read(&self, config: Value) -> Result<Value>;
}

#[async_trait]
impl<R: Lookup> DataSourceHandler for DataSource<R> {
    fn kind(&self) -> &'static str {
        R::KIND
    }

    fn schema(&self) -> Schema {
        R::lookup_schema()
    }

    async fn read(&self, config: Value) -> Result<Value> {
        let config = handler::decode::<R>(config)?;
        let state = DataSource::read(self, config).await?;
        handler::encode(&state)
    }
}
