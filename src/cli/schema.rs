//! Schema command.
//!
//! Works offline: no session token is needed to describe the provider.

use serde_json::Value;

use crate::cli::document;
use crate::core::client::Client;
use crate::core::constants::DEFAULT_ENDPOINT;
use crate::core::data_source::DataSourceHandler;
use crate::core::provider::Provider;
use crate::core::resource::ResourceHandler;
use crate::error::{ResourceError, Result};

/// Print every schema, or the schemas registered under `type_name`.
pub fn execute(type_name: Option<&str>) -> Result<()> {
    let provider = Provider::new(Client::new(DEFAULT_ENDPOINT, "")?);
    document::write(&select(&provider, type_name)?)
}

/// Full provider schema, or `{"resource": .., "data_source": ..}` for one
/// type name.
pub fn select(provider: &Provider, type_name: Option<&str>) -> Result<Value> {
    let Some(name) = type_name else {
        return Ok(serde_json::to_value(provider.schema())?);
    };

    let resource = provider.resource(name).ok().map(|h| h.schema());
    let data_source = provider.data_source(name).ok().map(|h| h.schema());
    if resource.is_none() && data_source.is_none() {
        return Err(ResourceError::UnknownType {
            category: "resource or data source",
            name: name.to_string(),
        }
        .into());
    }

    Ok(serde_json::json!({
        "resource": resource,
        "data_source": data_source,
    }))
}
