//! Resource lifecycle commands.

use std::path::Path;

use serde_json::Value;

use crate::cli::{document, output};
use crate::core::provider::Provider;
use crate::core::resource::ResourceHandler;
use crate::error::Result;

/// Create a resource and print its new state.
pub async fn create(provider: &Provider, type_name: &str, plan: Option<&Path>) -> Result<()> {
    let handler = provider.resource(type_name)?;
    let plan = document::read(plan)?;
    let state = handler.create(plan).await?;
    document::write(&state)
}

/// Refresh a state; prints `null` when the resource is gone.
pub async fn read(provider: &Provider, type_name: &str, state: Option<&Path>) -> Result<()> {
    let handler = provider.resource(type_name)?;
    let state = document::read(state)?;
    let refreshed = handler.read(state).await?;
    if refreshed.is_none() {
        output::warn(&format!("{} no longer exists", handler.type_name()));
    }
    document::write(&refreshed.unwrap_or(Value::Null))
}

/// Update a resource in place.
pub async fn update(
    provider: &Provider,
    type_name: &str,
    prior: &Path,
    plan: Option<&Path>,
) -> Result<()> {
    let handler = provider.resource(type_name)?;
    let prior = document::read(Some(prior))?;
    let plan = document::read(plan)?;
    let state = handler.update(plan, prior).await?;
    document::write(&state)
}

/// Delete a resource. Already-deleted resources succeed.
pub async fn delete(provider: &Provider, type_name: &str, state: Option<&Path>) -> Result<()> {
    let handler = provider.resource(type_name)?;
    let state = document::read(state)?;
    handler.delete(state).await?;
    output::success(&format!("{} deleted", handler.type_name()));
    Ok(())
}

/// Import by composite ID, then read the full state.
pub async fn import(provider: &Provider, type_name: &str, id: &str) -> Result<()> {
    let handler = provider.resource(type_name)?;
    let state = handler.import_state(id)?;
    let refreshed = handler.read(state).await?;
    if refreshed.is_none() {
        output::warn(&format!("{} {} does not exist", handler.type_name(), id));
    }
    document::write(&refreshed.unwrap_or(Value::Null))
}
