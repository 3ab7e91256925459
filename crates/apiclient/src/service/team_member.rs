use crate::{
    abstract_trait::team_member::TeamMemberClientTrait,
    domain::{
        requests::{
            api::item_path,
            team_member::{InviteTeamMemberRequest, UpdateTeamMemberRoleRequest},
        },
        response::team_member::TeamMemberResponse,
    },
    service::ApiClient,
};
use async_trait::async_trait;
use serde::de::IgnoredAny;
use shared::errors::ClientError;
use tracing::info;

const TEAM_MEMBERS_PATH: &str = "/api/team-members";

#[derive(Debug, Clone)]
pub struct TeamMemberService {
    client: ApiClient,
}

impl TeamMemberService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TeamMemberClientTrait for TeamMemberService {
    async fn find_all(&self) -> Result<Vec<TeamMemberResponse>, ClientError> {
        info!("Retrieving team members");

        let members: Vec<TeamMemberResponse> = self.client.get(TEAM_MEMBERS_PATH, None).await?;

        info!("Successfully fetched {} team members", members.len());
        Ok(members)
    }

    async fn invite_member(
        &self,
        req: &InviteTeamMemberRequest,
    ) -> Result<TeamMemberResponse, ClientError> {
        info!("Inviting {} as {:?}", req.email, req.role);

        self.client.post(TEAM_MEMBERS_PATH, req).await
    }

    async fn update_role(
        &self,
        id: &str,
        req: &UpdateTeamMemberRoleRequest,
    ) -> Result<TeamMemberResponse, ClientError> {
        info!("Changing role of team member {id} to {:?}", req.role);

        self.client
            .patch(&item_path(TEAM_MEMBERS_PATH, id), req)
            .await
    }

    async fn remove_member(&self, id: &str) -> Result<(), ClientError> {
        info!("Removing team member {id}");

        let _: IgnoredAny = self
            .client
            .delete(&item_path(TEAM_MEMBERS_PATH, id))
            .await?;
        Ok(())
    }
}
