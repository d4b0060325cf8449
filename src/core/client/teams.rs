//! Team and team membership endpoints.

use urlencoding::encode;

use super::models::{
    AddTeamMemberRequest, CreateTeamRequest, Team, TeamEnvelope, TeamMember, UpdateTeamMemberRequest,
    UpdateTeamRequest,
};
use super::Client;
use crate::error::ApiResult;

fn teams_path(org_id: &str) -> String {
    format!("/v1/organizations/{}/teams", encode(org_id))
}

fn team_path(org_id: &str, team_id: &str) -> String {
    format!("/v1/organizations/{}/teams/{}", encode(org_id), encode(team_id))
}

fn member_path(org_id: &str, team_id: &str, member_id: &str) -> String {
    format!("{}/members/{}", team_path(org_id, team_id), encode(member_id))
}

impl Client {
    /// Create a team in an organization.
    pub async fn create_team(&self, org_id: &str, req: &CreateTeamRequest) -> ApiResult<Team> {
        self.post::<TeamEnvelope, _>(&teams_path(org_id), req)
            .await
            .map(|resp| resp.team)
            .map_err(|e| e.context("failed to create team"))
    }

    /// Fetch a team by ID. GET returns the team unwrapped.
    pub async fn get_team(&self, org_id: &str, team_id: &str) -> ApiResult<Team> {
        self.get(&team_path(org_id, team_id))
            .await
            .map_err(|e| e.context("failed to get team"))
    }

    /// Update a team's name or description.
    pub async fn update_team(
        &self,
        org_id: &str,
        team_id: &str,
        req: &UpdateTeamRequest,
    ) -> ApiResult<Team> {
        self.patch::<TeamEnvelope, _>(&team_path(org_id, team_id), req)
            .await
            .map(|resp| resp.team)
            .map_err(|e| e.context("failed to update team"))
    }

    /// Delete a team.
    pub async fn delete_team(&self, org_id: &str, team_id: &str) -> ApiResult<()> {
        self.delete(&team_path(org_id, team_id))
            .await
            .map_err(|e| e.context("failed to delete team"))
    }

    /// Add a user to a team.
    pub async fn add_team_member(
        &self,
        org_id: &str,
        team_id: &str,
        req: &AddTeamMemberRequest,
    ) -> ApiResult<TeamMember> {
        let path = format!("{}/members", team_path(org_id, team_id));
        self.post(&path, req)
            .await
            .map_err(|e| e.context("failed to add team member"))
    }

    /// Fetch a team membership by ID.
    pub async fn get_team_member(
        &self,
        org_id: &str,
        team_id: &str,
        member_id: &str,
    ) -> ApiResult<TeamMember> {
        self.get(&member_path(org_id, team_id, member_id))
            .await
            .map_err(|e| e.context("failed to get team member"))
    }

    /// Change a member's role.
    pub async fn update_team_member(
        &self,
        org_id: &str,
        team_id: &str,
        member_id: &str,
        req: &UpdateTeamMemberRequest,
    ) -> ApiResult<TeamMember> {
        self.patch(&member_path(org_id, team_id, member_id), req)
            .await
            .map_err(|e| e.context("failed to update team member"))
    }

    /// Remove a user from a team.
    pub async fn remove_team_member(
        &self,
        org_id: &str,
        team_id: &str,
        member_id: &str,
    ) -> ApiResult<()> {
        self.delete(&member_path(org_id, team_id, member_id))
            .await
            .map_err(|e| e.context("failed to remove team member"))
    }
}
