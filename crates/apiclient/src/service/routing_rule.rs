use crate::{
    abstract_trait::routing_rule::RoutingRuleClientTrait,
    domain::{
        requests::{api::item_path, routing_rule::RoutingRuleRequest},
        response::routing_rule::RoutingRuleResponse,
    },
    service::ApiClient,
};
use async_trait::async_trait;
use serde::de::IgnoredAny;
use shared::errors::ClientError;
use tracing::info;

const ROUTING_RULES_PATH: &str = "/api/routing-rules";

#[derive(Debug, Clone)]
pub struct RoutingRuleService {
    client: ApiClient,
}

impl RoutingRuleService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoutingRuleClientTrait for RoutingRuleService {
    async fn find_all(&self) -> Result<Vec<RoutingRuleResponse>, ClientError> {
        info!("Retrieving routing rules");

        let rules: Vec<RoutingRuleResponse> = self.client.get(ROUTING_RULES_PATH, None).await?;

        info!("Successfully fetched {} routing rules", rules.len());
        Ok(rules)
    }

    async fn create_rule(
        &self,
        req: &RoutingRuleRequest,
    ) -> Result<RoutingRuleResponse, ClientError> {
        info!("Creating routing rule {}", req.name);

        self.client.post(ROUTING_RULES_PATH, req).await
    }

    async fn replace_rule(
        &self,
        id: &str,
        req: &RoutingRuleRequest,
    ) -> Result<RoutingRuleResponse, ClientError> {
        info!("Replacing routing rule {id}");

        self.client
            .put(&item_path(ROUTING_RULES_PATH, id), req)
            .await
    }

    async fn delete_rule(&self, id: &str) -> Result<(), ClientError> {
        info!("Deleting routing rule {id}");

        let _: IgnoredAny = self
            .client
            .delete(&item_path(ROUTING_RULES_PATH, id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::response::{account::Channel, routing_rule::RoutingCondition},
        service::testing::{RecordingTransport, client_with},
        store::MemorySessionStore,
    };
    use shared::utils::Method;

    fn rule() -> RoutingRuleRequest {
        RoutingRuleRequest {
            name: "Enterprise leads".into(),
            channel: Some(Channel::Email),
            conditions: vec![RoutingCondition {
                field: "domain".into(),
                operator: "ends_with".into(),
                value: ".enterprise.com".into(),
            }],
            assign_to: Some("user-2".into()),
            stage_id: None,
            priority: 1,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn replace_is_a_put_on_the_rule() {
        let transport = RecordingTransport::replying(
            200,
            r#"{"data":{"id":"r1","name":"Enterprise leads","channel":"email","priority":1,"is_active":true}}"#,
        );
        let service =
            RoutingRuleService::new(client_with(MemorySessionStore::new(), transport.clone()));

        let updated = service.replace_rule("r1", &rule()).await.unwrap();

        assert_eq!(updated.channel, Some(Channel::Email));
        assert!(updated.is_active);
        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url.path(), "/api/routing-rules/r1");
    }

    #[tokio::test]
    async fn create_rule_unwrapped_body_is_accepted() {
        let transport = RecordingTransport::replying(
            201,
            r#"{"id":"r2","name":"Enterprise leads","conditions":[],"priority":1,"is_active":true}"#,
        );
        let service = RoutingRuleService::new(client_with(MemorySessionStore::new(), transport));

        let created = service.create_rule(&rule()).await.unwrap();

        assert_eq!(created.id, "r2");
    }
}
