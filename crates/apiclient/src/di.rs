use crate::{
    abstract_trait::{
        DynAccountClient, DynConversationClient, DynRoutingRuleClient, DynStageClient,
        DynTeamMemberClient,
    },
    service::{
        AccountService, ApiClient, ConversationService, RoutingRuleService, StageService,
        TeamMemberService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub account_client: DynAccountClient,
    pub stage_client: DynStageClient,
    pub team_member_client: DynTeamMemberClient,
    pub routing_rule_client: DynRoutingRuleClient,
    pub conversation_client: DynConversationClient,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("account_client", &"DynAccountClient")
            .field("stage_client", &"DynStageClient")
            .field("team_member_client", &"DynTeamMemberClient")
            .field("routing_rule_client", &"DynRoutingRuleClient")
            .field("conversation_client", &"DynConversationClient")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(client: ApiClient) -> Self {
        let account_client: DynAccountClient = Arc::new(AccountService::new(client.clone()));
        let stage_client: DynStageClient = Arc::new(StageService::new(client.clone()));
        let team_member_client: DynTeamMemberClient =
            Arc::new(TeamMemberService::new(client.clone()));
        let routing_rule_client: DynRoutingRuleClient =
            Arc::new(RoutingRuleService::new(client.clone()));
        let conversation_client: DynConversationClient =
            Arc::new(ConversationService::new(client));

        Self {
            account_client,
            stage_client,
            team_member_client,
            routing_rule_client,
            conversation_client,
        }
    }
}
