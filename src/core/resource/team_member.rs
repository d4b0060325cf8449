//! `inferadb_team_member`: a user's membership in a team.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{non_empty, required, ResourceKind};
use crate::core::client::models::{
    self, AddTeamMemberRequest, TeamRole, UpdateTeamMemberRequest,
};
use crate::core::client::Client;
use crate::core::schema::{Attribute, Schema};
use crate::error::{ApiResult, ResourceError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberState {
    #[serde(default)]
    pub id: String,
    pub organization_id: String,
    pub team_id: String,
    pub user_id: Option<String>,
    pub role: Option<TeamRole>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TeamMember;

const TEAM_ROLES: &[&str] = &["maintainer", "member"];

/// The planned role, which must be one this crate can send.
fn require_role(plan: &TeamMemberState) -> Result<TeamRole> {
    match &plan.role {
        None => Err(ResourceError::MissingAttribute {
            kind: TeamMember::KIND,
            attribute: "role",
        }
        .into()),
        Some(TeamRole::Unrecognized(value)) => Err(ResourceError::InvalidAttribute {
            kind: TeamMember::KIND,
            attribute: "role",
            value: value.clone(),
            expected: TEAM_ROLES.join(", "),
        }
        .into()),
        Some(role) => Ok(role.clone()),
    }
}

#[async_trait]
impl ResourceKind for TeamMember {
    const KIND: &'static str = "team_member";
    const IMPORT_FORMAT: &'static [&'static str] = &["org_id", "team_id", "member_id"];

    type State = TeamMemberState;
    type Remote = models::TeamMember;
    type CreateBody = AddTeamMemberRequest;
    type UpdateBody = UpdateTeamMemberRequest;

    fn schema() -> Schema {
        Schema::new("Manages a user's membership in a team.")
            .attribute("id", Attribute::computed("Membership ID."))
            .attribute(
                "organization_id",
                Attribute::required("ID of the owning organization.").replace(),
            )
            .attribute("team_id", Attribute::required("ID of the team.").replace())
            .attribute("user_id", Attribute::required("ID of the user.").replace())
            .attribute(
                "role",
                Attribute::required("Role within the team: `maintainer` or `member`.")
                    .one_of(TEAM_ROLES),
            )
            .attribute("created_at", Attribute::computed("Creation timestamp."))
    }

    fn create_body(plan: &TeamMemberState) -> Result<AddTeamMemberRequest> {
        Ok(AddTeamMemberRequest {
            user_id: required(Self::KIND, "user_id", &plan.user_id)?.to_string(),
            role: require_role(plan)?,
        })
    }

    fn update_body(plan: &TeamMemberState) -> Result<UpdateTeamMemberRequest> {
        Ok(UpdateTeamMemberRequest {
            role: require_role(plan)?,
        })
    }

    fn apply(state: &mut TeamMemberState, remote: models::TeamMember) {
        state.user_id = non_empty(remote.user_id.into_string()).or(state.user_id.take());
        state.role = Some(remote.role);
        state.created_at = non_empty(remote.created_at);
    }

    fn id(state: &TeamMemberState) -> &str {
        &state.id
    }

    fn set_id(state: &mut TeamMemberState, id: String) {
        state.id = id;
    }

    fn remote_id(remote: &models::TeamMember) -> String {
        remote.id.to_string()
    }

    fn from_import(segments: &[String]) -> TeamMemberState {
        TeamMemberState {
            organization_id: segments[0].clone(),
            team_id: segments[1].clone(),
            id: segments[2].clone(),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &Client,
        plan: &TeamMemberState,
        body: &AddTeamMemberRequest,
    ) -> ApiResult<models::TeamMember> {
        client
            .add_team_member(&plan.organization_id, &plan.team_id, body)
            .await
    }

    async fn fetch(
        &self,
        client: &Client,
        state: &TeamMemberState,
    ) -> ApiResult<models::TeamMember> {
        client
            .get_team_member(&state.organization_id, &state.team_id, &state.id)
            .await
    }

    async fn send_update(
        &self,
        client: &Client,
        state: &TeamMemberState,
        body: &UpdateTeamMemberRequest,
    ) -> ApiResult<models::TeamMember> {
        client
            .update_team_member(&state.organization_id, &state.team_id, &state.id, body)
            .await
    }

    async fn remove(&self, client: &Client, state: &TeamMemberState) -> ApiResult<()> {
        client
            .remove_team_member(&state.organization_id, &state.team_id, &state.id)
            .await
    }
}
