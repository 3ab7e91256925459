use crate::{
    abstract_trait::conversation::ConversationClientTrait,
    domain::{
        requests::{
            api::item_path,
            conversation::{
                FindAllConversations, SendMessageBody, SendMessageRequest,
                UpdateConversationRequest,
            },
        },
        response::conversation::{ConversationResponse, MessageResponse},
    },
    service::ApiClient,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use tracing::info;

const CONVERSATIONS_PATH: &str = "/api/conversations";

#[derive(Debug, Clone)]
pub struct ConversationService {
    client: ApiClient,
}

impl ConversationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConversationClientTrait for ConversationService {
    async fn find_all(
        &self,
        req: &FindAllConversations,
    ) -> Result<Vec<ConversationResponse>, ClientError> {
        info!(
            "Retrieving conversations (status: {:?}, account: {:?}, search: {:?})",
            req.status, req.account_id, req.search
        );

        let conversations: Vec<ConversationResponse> = self
            .client
            .get(CONVERSATIONS_PATH, Some(req.to_query()))
            .await?;

        info!("Successfully fetched {} conversations", conversations.len());
        Ok(conversations)
    }

    async fn find_by_id(&self, id: &str) -> Result<ConversationResponse, ClientError> {
        info!("Retrieving conversation {id}");

        self.client
            .get(&item_path(CONVERSATIONS_PATH, id), None)
            .await
    }

    async fn update_conversation(
        &self,
        id: &str,
        req: &UpdateConversationRequest,
    ) -> Result<ConversationResponse, ClientError> {
        info!("Updating conversation {id}");

        self.client
            .patch(&item_path(CONVERSATIONS_PATH, id), req)
            .await
    }

    async fn find_messages(&self, id: &str) -> Result<Vec<MessageResponse>, ClientError> {
        info!("Retrieving messages of conversation {id}");

        let messages: Vec<MessageResponse> = self
            .client
            .get(&format!("{}/messages", item_path(CONVERSATIONS_PATH, id)), None)
            .await?;

        info!("Successfully fetched {} messages", messages.len());
        Ok(messages)
    }

    async fn send_message(
        &self,
        id: &str,
        req: &SendMessageRequest,
    ) -> Result<MessageResponse, ClientError> {
        let path = format!("{}/messages", item_path(CONVERSATIONS_PATH, id));

        if req.has_attachments() {
            info!(
                "Sending message with {} attachments to conversation {id}",
                req.attachments.len()
            );
            self.client.post_form(&path, req.to_form()).await
        } else {
            info!("Sending message to conversation {id}");
            self.client
                .post(&path, &SendMessageBody { body: &req.body })
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            requests::{api::RequestBody, conversation::Attachment},
            response::conversation::{ConversationStatus, MessageDirection},
        },
        service::testing::{RecordingTransport, client_with},
        store::MemorySessionStore,
    };

    const MESSAGE: &str = r#"{"data":{"id":"m1","conversation_id":"c1","direction":"outbound","body":"Hi"}}"#;

    #[tokio::test]
    async fn find_all_sends_filters_as_query() {
        let transport = RecordingTransport::replying(
            200,
            r#"{"data":[{"id":"c1","account_id":"a1","channel":"email","status":"open","unread_count":2}]}"#,
        );
        let service =
            ConversationService::new(client_with(MemorySessionStore::new(), transport.clone()));

        let conversations = service
            .find_all(&FindAllConversations {
                status: Some(ConversationStatus::Open),
                search: Some("acme".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(conversations[0].unread_count, 2);
        assert_eq!(transport.last().url.query(), Some("status=open&search=acme"));
    }

    #[tokio::test]
    async fn find_all_without_filters_has_no_query() {
        let transport = RecordingTransport::replying(200, r#"{"data":[]}"#);
        let service =
            ConversationService::new(client_with(MemorySessionStore::new(), transport.clone()));

        service
            .find_all(&FindAllConversations::default())
            .await
            .unwrap();

        assert_eq!(transport.last().url.query(), None);
    }

    #[tokio::test]
    async fn conversation_id_is_escaped_in_path() {
        let transport = RecordingTransport::replying(200, r#"{"data":[]}"#);
        let service =
            ConversationService::new(client_with(MemorySessionStore::new(), transport.clone()));

        service.find_messages("c/1?x#y").await.unwrap();

        let sent = transport.last();
        assert_eq!(sent.url.path(), "/api/conversations/c%2F1%3Fx%23y/messages");
        assert_eq!(sent.url.query(), None);
        assert_eq!(sent.url.fragment(), None);
    }

    #[tokio::test]
    async fn text_message_is_sent_as_json() {
        let transport = RecordingTransport::replying(201, MESSAGE);
        let service =
            ConversationService::new(client_with(MemorySessionStore::new(), transport.clone()));

        let message = service
            .send_message("c1", &SendMessageRequest::text("Hi"))
            .await
            .unwrap();

        assert_eq!(message.direction, MessageDirection::Outbound);
        let sent = transport.last();
        assert_eq!(sent.url.path(), "/api/conversations/c1/messages");
        assert_eq!(sent.body, RequestBody::Json(br#"{"body":"Hi"}"#.to_vec()));
        assert_eq!(sent.headers["content-type"], "application/json");
    }

    #[tokio::test]
    async fn message_with_attachments_is_sent_as_form() {
        let transport = RecordingTransport::replying(201, MESSAGE);
        let service =
            ConversationService::new(client_with(MemorySessionStore::new(), transport.clone()));

        service
            .send_message(
                "c1",
                &SendMessageRequest {
                    body: "Hi".into(),
                    attachments: vec![Attachment {
                        file_name: "deck.pdf".into(),
                        mime_type: Some("application/pdf".into()),
                        bytes: b"%PDF".to_vec(),
                    }],
                },
            )
            .await
            .unwrap();

        let sent = transport.last();
        assert!(sent.body.is_form());
        assert!(sent.headers.get("content-type").is_none());
    }
}
