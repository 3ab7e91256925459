use crate::domain::{
    requests::api::{FormPayload, QueryParams},
    response::{account::Channel, conversation::ConversationStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindAllConversations {
    pub account_id: Option<String>,
    pub channel: Option<Channel>,
    pub status: Option<ConversationStatus>,
    pub stage_id: Option<String>,
    pub assigned_to: Option<String>,
    pub search: Option<String>,
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}

impl FindAllConversations {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.insert_opt("account_id", self.account_id.as_deref());
        query.insert_opt("channel", self.channel);
        query.insert_opt("status", self.status);
        query.insert_opt("stage_id", self.stage_id.as_deref());
        query.insert_opt("assigned_to", self.assigned_to.as_deref());
        query.insert_opt("search", self.search.as_deref());
        query.insert_opt("page", self.page);
        query.insert_opt("page_size", self.page_size);
        query
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateConversationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConversationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub body: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendMessageBody<'a> {
    pub body: &'a str,
}

impl SendMessageRequest {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            attachments: Vec::new(),
        }
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    pub fn to_form(&self) -> FormPayload {
        self.attachments.iter().fold(
            FormPayload::new().text("body", self.body.clone()),
            |form, attachment| {
                form.file(
                    "attachments",
                    attachment.file_name.clone(),
                    attachment.mime_type.clone(),
                    attachment.bytes.clone(),
                )
            },
        )
    }
}
