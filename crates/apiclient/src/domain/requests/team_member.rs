use crate::domain::response::team_member::TeamRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteTeamMemberRequest {
    pub email: String,
    pub role: TeamRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTeamMemberRoleRequest {
    pub role: TeamRole,
}
