use crate::domain::response::{account::Channel, routing_rule::RoutingCondition};
use serde::{Deserialize, Serialize};

/// Full rule body, used both to create a rule and to replace one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingRuleRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    pub conditions: Vec<RoutingCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<String>,
    pub priority: i32,
    pub is_active: bool,
}
