//! `inferadb_team`: group of users within an organization.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{non_empty, or_empty, required, ResourceKind};
use crate::core::client::models::{self, CreateTeamRequest, UpdateTeamRequest};
use crate::core::client::Client;
use crate::core::schema::{Attribute, Schema};
use crate::error::{ApiResult, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    #[serde(default)]
    pub id: String,
    pub organization_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Team;

#[async_trait]
impl ResourceKind for Team {
    const KIND: &'static str = "team";
    const IMPORT_FORMAT: &'static [&'static str] = &["org_id", "team_id"];

    type State = TeamState;
    type Remote = models::Team;
    type CreateBody = CreateTeamRequest;
    type UpdateBody = UpdateTeamRequest;

    fn schema() -> Schema {
        Schema::new("Manages a team. Teams group users so vault access can be granted once.")
            .attribute("id", Attribute::computed("Team ID."))
            .attribute(
                "organization_id",
                Attribute::required("ID of the owning organization.").replace(),
            )
            .attribute("name", Attribute::required("Name of the team."))
            .attribute("description", Attribute::optional("Description of the team."))
            .attribute("created_at", Attribute::computed("Creation timestamp."))
    }

    fn create_body(plan: &TeamState) -> Result<CreateTeamRequest> {
        Ok(CreateTeamRequest {
            name: required(Self::KIND, "name", &plan.name)?.to_string(),
            description: or_empty(&plan.description),
        })
    }

    fn update_body(plan: &TeamState) -> Result<UpdateTeamRequest> {
        Ok(UpdateTeamRequest {
            name: required(Self::KIND, "name", &plan.name)?.to_string(),
            description: or_empty(&plan.description),
        })
    }

    fn apply(state: &mut TeamState, remote: models::Team) {
        state.name = Some(remote.name);
        state.description = remote.description.filter(|d| !d.is_empty());
        state.created_at = non_empty(remote.created_at);
    }

    fn id(state: &TeamState) -> &str {
        &state.id
    }

    fn set_id(state: &mut TeamState, id: String) {
        state.id = id;
    }

    fn remote_id(remote: &models::Team) -> String {
        remote.id.to_string()
    }

    fn from_import(segments: &[String]) -> TeamState {
        TeamState {
            organization_id: segments[0].clone(),
            id: segments[1].clone(),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &Client,
        plan: &TeamState,
        body: &CreateTeamRequest,
    ) -> ApiResult<models::Team> {
        client.create_team(&plan.organization_id, body).await
    }

    async fn fetch(&self, client: &Client, state: &TeamState) -> ApiResult<models::Team> {
        client.get_team(&state.organization_id, &state.id).await
    }

    async fn send_update(
        &self,
        client: &Client,
        state: &TeamState,
        body: &UpdateTeamRequest,
    ) -> ApiResult<models::Team> {
        client
            .update_team(&state.organization_id, &state.id, body)
            .await
    }

    async fn remove(&self, client: &Client, state: &TeamState) -> ApiResult<()> {
        client.delete_team(&state.organization_id, &state.id).await
    }
}
