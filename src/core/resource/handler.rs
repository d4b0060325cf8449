//! Host-facing resource interface.
//!
//! The host exchanges states as JSON documents and picks resources by type
//! name at runtime, so it needs an object-safe view of [`Lifecycle`].

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{Lifecycle, ResourceKind};
use crate::core::constants::PROVIDER_TYPE_NAME;
use crate::core::schema::Schema;
use crate::error::{ResourceError, Result};

/// Type-erased resource lifecycle operating on JSON states.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// Short type name, e.g. `vault`.
    fn kind(&self) -> &'static str;

    /// Full type name, e.g. `inferadb_vault`.
    fn type_name(&self) -> String {
        format!("{}_{}", PROVIDER_TYPE_NAME, self.kind())
    }

    fn schema(&self) -> Schema;

    /// Segment names of the composite import ID.
    fn import_format(&self) -> &'static [&'static str];

    async fn create(&self, plan: Value) -> Result<Value>;

    /// Refresh a state. `None` means the entity is gone.
    async fn read(&self, state: Value) -> Result<Option<Value>>;

    async fn update(&self, plan: Value, prior: Value) -> Result<Value>;

    async fn delete(&self, state: Value) -> Result<()>;

    fn import_state(&self, id: &str) -> Result<Value>;
}

/// Decode a JSON document into a typed state.
pub(crate) fn decode<R: ResourceKind>(value: Value) -> Result<R::State> {
    serde_json::from_value(value).map_err(|source| {
        ResourceError::InvalidState {
            kind: R::KIND,
            source,
        }
        .into()
    })
}

pub(crate) fn encode<S: Serialize>(state: &S) -> Result<Value> {
    Ok(serde_json::to_value(state)?)
}

#[async_trait]
impl<R: ResourceKind> ResourceHandler for Lifecycle<R> {
    fn kind(&self) -> &'static str {
        R::KIND
    }

    fn schema(&self) -> Schema {
        R::schema()
    }

    fn import_format(&self) -> &'static [&'static str] {
        R::IMPORT_FORMAT
    }

    async fn create(&self, plan: Value) -> Result<Value> {
        let plan = decode::<R>(plan)?;
        let state = Lifecycle::create(self, plan).await?;
        encode(&state)
    }

    async fn read(&self, state: Value) -> Result<Option<Value>> {
        let state = decode::<R>(state)?;
        match Lifecycle::read(self, state).await?.into_option() {
            Some(state) => Ok(Some(encode(&state)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, plan: Value, prior: Value) -> Result<Value> {
        let plan = decode::<R>(plan)?;
        let prior = decode::<R>(prior)?;
        let state = Lifecycle::update(self, plan, &prior).await?;
        encode(&state)
    }

    async fn delete(&self, state: Value) -> Result<()> {
        let state = decode::<R>(state)?;
        Lifecycle::delete(self, &state).await
    }

    fn import_state(&self, id: &str) -> Result<Value> {
        let state = Lifecycle::import_state(self, id)?;
        encode(&state)
    }
}
