use crate::domain::{
    requests::routing_rule::RoutingRuleRequest, response::routing_rule::RoutingRuleResponse,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynRoutingRuleClient = Arc<dyn RoutingRuleClientTrait + Send + Sync>;

#[async_trait]
pub trait RoutingRuleClientTrait {
    async fn find_all(&self) -> Result<Vec<RoutingRuleResponse>, ClientError>;
    async fn create_rule(&self, req: &RoutingRuleRequest)
    -> Result<RoutingRuleResponse, ClientError>;
    async fn replace_rule(
        &self,
        id: &str,
        req: &RoutingRuleRequest,
    ) -> Result<RoutingRuleResponse, ClientError>;
    async fn delete_rule(&self, id: &str) -> Result<(), ClientError>;
}
