//! Resource lifecycle.
//!
//! Every managed entity goes through the same steps: create, read, update,
//! delete, and import. [`Lifecycle`] runs those steps once; the per-entity
//! differences (request bodies, endpoints, which fields the server owns)
//! live behind the [`ResourceKind`] trait.
//!
//! ## Adding a New Resource
//!
//! 1. Define the state struct (identifiers as `String`, everything else
//!    `Option`) in a new file
//! 2. Implement `ResourceKind` for a unit struct
//! 3. Register it in `Provider::new`

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::client::Client;
use crate::core::schema::Schema;
use crate::error::{ApiError, ApiResult, Operation, ResourceError, Result};

mod certificate;
mod client;
mod grant;
pub(crate) mod handler;
mod organization;
mod team;
mod team_member;
mod vault;

pub use certificate::{Certificate, CertificateState};
pub use client::{ClientState, ServiceClient};
pub use grant::{TeamGrantState, UserGrantState, VaultTeamGrant, VaultUserGrant};
pub use handler::ResourceHandler;
pub use organization::{normalize_tier, Organization, OrganizationState};
pub use team::{Team, TeamState};
pub use team_member::{TeamMember, TeamMemberState};
pub use vault::{Vault, VaultState};

/// Per-entity strategy driven by [`Lifecycle`].
///
/// Implementations are stateless unit structs. The endpoint methods make
/// exactly one API call each.
#[async_trait]
pub trait ResourceKind: Send + Sync + 'static {
    /// Short type name, e.g. `vault`.
    const KIND: &'static str;

    /// Segment names of the composite import ID, outermost scope first.
    const IMPORT_FORMAT: &'static [&'static str];

    /// Every configurable attribute forces replacement; update is never valid.
    const FULLY_IMMUTABLE: bool = false;

    /// Declarative state as stored by the host.
    type State: Serialize + DeserializeOwned + Clone + Send + Sync;

    /// Entity as returned by the API.
    type Remote: Send;

    type CreateBody: Send + Sync;
    type UpdateBody: Send + Sync;

    fn schema() -> Schema;

    /// Build the create request from a plan.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::MissingAttribute` when a required attribute
    /// is unset.
    fn create_body(plan: &Self::State) -> Result<Self::CreateBody>;

    /// Build the update request from a plan; only mutable fields are sent.
    fn update_body(plan: &Self::State) -> Result<Self::UpdateBody>;

    /// Copy server-owned fields from `remote` into `state`.
    ///
    /// Never touches the identifier or ancestor scope.
    fn apply(state: &mut Self::State, remote: Self::Remote);

    fn id(state: &Self::State) -> &str;

    fn set_id(state: &mut Self::State, id: String);

    fn remote_id(remote: &Self::Remote) -> String;

    /// Build a state holding only scope and identifier.
    ///
    /// `segments` always has exactly `IMPORT_FORMAT.len()` non-empty entries.
    fn from_import(segments: &[String]) -> Self::State;

    async fn send_create(
        &self,
        client: &Client,
        plan: &Self::State,
        body: &Self::CreateBody,
    ) -> ApiResult<Self::Remote>;

    async fn fetch(&self, client: &Client, state: &Self::State) -> ApiResult<Self::Remote>;

    async fn send_update(
        &self,
        client: &Client,
        state: &Self::State,
        body: &Self::UpdateBody,
    ) -> ApiResult<Self::Remote>;

    async fn remove(&self, client: &Client, state: &Self::State) -> ApiResult<()>;
}

/// Result of refreshing a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<S> {
    /// The entity exists; carries the refreshed state.
    Present(S),
    /// The entity no longer exists and should be dropped from state.
    Gone,
}

impl<S> ReadOutcome<S> {
    pub fn into_option(self) -> Option<S> {
        match self {
            Self::Present(state) => Some(state),
            Self::Gone => None,
        }
    }
}

/// Lifecycle engine for one resource kind.
#[derive(Debug, Clone)]
pub struct Lifecycle<R> {
    client: Client,
    kind: R,
}

impl<R: ResourceKind> Lifecycle<R> {
    pub fn new(client: Client, kind: R) -> Self {
        Self { client, kind }
    }

    /// Create the entity and return the plan merged with server fields.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::MissingAttribute` for an incomplete plan, or
    /// `ResourceError::Operation` when the API call fails. Nothing is
    /// returned for the host to persist in either case.
    pub async fn create(&self, plan: R::State) -> Result<R::State> {
        let body = R::create_body(&plan)?;
        debug!(kind = R::KIND, "creating resource");

        let remote = self
            .kind
            .send_create(&self.client, &plan, &body)
            .await
            .map_err(|source| operation_error::<R>(Operation::Create, None, source))?;

        let mut state = plan;
        R::set_id(&mut state, R::remote_id(&remote));
        R::apply(&mut state, remote);

        debug!(kind = R::KIND, id = %R::id(&state), "resource created");
        Ok(state)
    }

    /// Refresh state from the API.
    ///
    /// A 404 yields [`ReadOutcome::Gone`].
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::Operation` for any other API failure.
    pub async fn read(&self, state: R::State) -> Result<ReadOutcome<R::State>> {
        let id = require_id::<R>(&state)?;
        debug!(kind = R::KIND, id = %id, "reading resource");

        match self.kind.fetch(&self.client, &state).await {
            Ok(remote) => {
                let mut state = state;
                R::apply(&mut state, remote);
                Ok(ReadOutcome::Present(state))
            }
            Err(err) if err.is_not_found() => {
                warn!(kind = R::KIND, id = %id, "resource not found, removing from state");
                Ok(ReadOutcome::Gone)
            }
            Err(source) => Err(operation_error::<R>(Operation::Read, Some(id), source)),
        }
    }

    /// Push mutable fields from `plan` and return the merged state.
    ///
    /// The identifier comes from `prior`; plans do not carry it.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::ImmutableUpdate` for kinds where every
    /// attribute forces replacement, or `ResourceError::Operation` when
    /// the API call fails.
    pub async fn update(&self, plan: R::State, prior: &R::State) -> Result<R::State> {
        if R::FULLY_IMMUTABLE {
            return Err(ResourceError::ImmutableUpdate { kind: R::KIND }.into());
        }

        let id = require_id::<R>(prior)?;
        let mut state = plan;
        R::set_id(&mut state, id.clone());

        let body = R::update_body(&state)?;
        debug!(kind = R::KIND, id = %id, "updating resource");

        let remote = self
            .kind
            .send_update(&self.client, &state, &body)
            .await
            .map_err(|source| operation_error::<R>(Operation::Update, Some(id), source))?;

        R::apply(&mut state, remote);
        Ok(state)
    }

    /// Delete the entity. Already-deleted entities count as success.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::Operation` for API failures other than 404.
    pub async fn delete(&self, state: &R::State) -> Result<()> {
        let id = require_id::<R>(state)?;
        debug!(kind = R::KIND, id = %id, "deleting resource");

        match self.kind.remove(&self.client, state).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_not_found() => {
                warn!(kind = R::KIND, id = %id, "resource already deleted");
                Ok(())
            }
            Err(source) => Err(operation_error::<R>(Operation::Delete, Some(id), source)),
        }
    }

    /// Turn a composite import ID into a minimal state.
    ///
    /// The caller is expected to [`read`](Self::read) it afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::InvalidImportId` when the ID does not match
    /// the kind's format.
    pub fn import_state(&self, import_id: &str) -> Result<R::State> {
        let segments = parse_import_id(R::KIND, R::IMPORT_FORMAT, import_id)?;
        Ok(R::from_import(&segments))
    }

    pub fn schema(&self) -> Schema {
        R::schema()
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Render an import format as `<org_id>/<vault_id>`.
pub fn import_format(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| format!("<{s}>"))
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a composite import ID into exactly `format.len()` segments.
///
/// # Errors
///
/// Returns `ResourceError::InvalidImportId` for a wrong segment count or
/// any empty segment.
pub fn parse_import_id(kind: &'static str, format: &[&str], id: &str) -> Result<Vec<String>> {
    let segments: Vec<String> = id.split('/').map(str::to_string).collect();

    if segments.len() != format.len() || segments.iter().any(String::is_empty) {
        return Err(ResourceError::InvalidImportId {
            kind,
            expected: import_format(format),
            got: id.to_string(),
        }
        .into());
    }

    Ok(segments)
}

fn require_id<R: ResourceKind>(state: &R::State) -> Result<String> {
    let id = R::id(state);
    if id.is_empty() {
        return Err(ResourceError::MissingAttribute {
            kind: R::KIND,
            attribute: "id",
        }
        .into());
    }
    Ok(id.to_string())
}

fn operation_error<R: ResourceKind>(
    operation: Operation,
    id: Option<String>,
    source: ApiError,
) -> crate::error::Error {
    ResourceError::Operation {
        operation,
        kind: R::KIND,
        id,
        source,
    }
    .into()
}

/// Unwrap a required plan attribute.
pub(crate) fn required<'a>(
    kind: &'static str,
    attribute: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ResourceError::MissingAttribute { kind, attribute }.into())
}

/// Empty-string mapping for optional request fields.
pub(crate) fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Treat an empty server string as unset.
pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
