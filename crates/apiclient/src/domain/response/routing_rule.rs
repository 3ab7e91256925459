use crate::domain::response::account::Channel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoutingCondition {
    pub field: String,
    pub operator: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoutingRuleResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub channel: Option<Channel>,
    #[serde(default)]
    pub conditions: Vec<RoutingCondition>,
    #[serde(default)]
    pub assign_to: Option<String>,
    #[serde(default)]
    pub stage_id: Option<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}
