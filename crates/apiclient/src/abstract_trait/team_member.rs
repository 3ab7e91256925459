use crate::domain::{
    requests::team_member::{InviteTeamMemberRequest, UpdateTeamMemberRoleRequest},
    response::team_member::TeamMemberResponse,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynTeamMemberClient = Arc<dyn TeamMemberClientTrait + Send + Sync>;

#[async_trait]
pub trait TeamMemberClientTrait {
    async fn find_all(&self) -> Result<Vec<TeamMemberResponse>, ClientError>;
    async fn invite_member(
        &self,
        req: &InviteTeamMemberRequest,
    ) -> Result<TeamMemberResponse, ClientError>;
    async fn update_role(
        &self,
        id: &str,
        req: &UpdateTeamMemberRoleRequest,
    ) -> Result<TeamMemberResponse, ClientError>;
    async fn remove_member(&self, id: &str) -> Result<(), ClientError>;
}
