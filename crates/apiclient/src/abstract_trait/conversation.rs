use crate::domain::{
    requests::conversation::{
        FindAllConversations, SendMessageRequest, UpdateConversationRequest,
    },
    response::conversation::{ConversationResponse, MessageResponse},
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynConversationClient = Arc<dyn ConversationClientTrait + Send + Sync>;

#[async_trait]
pub trait ConversationClientTrait {
    async fn find_all(
        &self,
        req: &FindAllConversations,
    ) -> Result<Vec<ConversationResponse>, ClientError>;
    async fn find_by_id(&self, id: &str) -> Result<ConversationResponse, ClientError>;
    async fn update_conversation(
        &self,
        id: &str,
        req: &UpdateConversationRequest,
    ) -> Result<ConversationResponse, ClientError>;
    async fn find_messages(&self, id: &str) -> Result<Vec<MessageResponse>, ClientError>;
    async fn send_message(
        &self,
        id: &str,
        req: &SendMessageRequest,
    ) -> Result<MessageResponse, ClientError>;
}
