use crate::{
    abstract_trait::stage::StageClientTrait,
    domain::{
        requests::{
            api::item_path,
            stage::{CreateStageRequest, ReorderStagesRequest, UpdateStageRequest},
        },
        response::stage::StageResponse,
    },
    service::ApiClient,
};
use async_trait::async_trait;
use serde::de::IgnoredAny;
use shared::errors::ClientError;
use tracing::info;

const STAGES_PATH: &str = "/api/pipeline-stages";

#[derive(Debug, Clone)]
pub struct StageService {
    client: ApiClient,
}

impl StageService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StageClientTrait for StageService {
    async fn find_all(&self) -> Result<Vec<StageResponse>, ClientError> {
        info!("Retrieving pipeline stages");

        let stages: Vec<StageResponse> = self.client.get(STAGES_PATH, None).await?;

        info!("Successfully fetched {} pipeline stages", stages.len());
        Ok(stages)
    }

    async fn create_stage(&self, req: &CreateStageRequest) -> Result<StageResponse, ClientError> {
        info!("Creating pipeline stage {}", req.name);

        self.client.post(STAGES_PATH, req).await
    }

    async fn update_stage(
        &self,
        id: &str,
        req: &UpdateStageRequest,
    ) -> Result<StageResponse, ClientError> {
        info!("Updating pipeline stage {id}");

        self.client.patch(&item_path(STAGES_PATH, id), req).await
    }

    async fn reorder_stages(
        &self,
        req: &ReorderStagesRequest,
    ) -> Result<Vec<StageResponse>, ClientError> {
        info!("Reordering {} pipeline stages", req.stage_ids.len());

        self.client
            .put(&format!("{STAGES_PATH}/reorder"), req)
            .await
    }

    async fn delete_stage(&self, id: &str) -> Result<(), ClientError> {
        info!("Deleting pipeline stage {id}");

        let _: IgnoredAny = self.client.delete(&item_path(STAGES_PATH, id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{requests::api::RequestBody, response::session::Session},
        service::testing::{RecordingTransport, client_with},
        store::MemorySessionStore,
    };
    use shared::utils::Method;

    #[tokio::test]
    async fn create_stage_sends_only_set_fields_with_bearer() {
        let transport = RecordingTransport::replying(
            201,
            r#"{"data":{"id":"s1","name":"Demo","position":3}}"#,
        );
        let store = MemorySessionStore::with_session(&Session::new("abc", "user-1")).unwrap();
        let service = StageService::new(client_with(store, transport.clone()));

        let stage = service
            .create_stage(&CreateStageRequest {
                name: "Demo".into(),
                color: None,
                position: None,
            })
            .await
            .unwrap();

        assert_eq!(stage.position, 3);
        let sent = transport.last();
        assert_eq!(sent.url.path(), "/api/pipeline-stages");
        assert_eq!(sent.headers["authorization"], "Bearer abc");
        assert_eq!(sent.headers["content-type"], "application/json");
        assert_eq!(sent.body, RequestBody::Json(br#"{"name":"Demo"}"#.to_vec()));
    }

    #[tokio::test]
    async fn update_stage_is_a_patch() {
        let transport =
            RecordingTransport::replying(200, r#"{"data":{"id":"s1","name":"Won"}}"#);
        let service = StageService::new(client_with(MemorySessionStore::new(), transport.clone()));

        let stage = service
            .update_stage(
                "s1",
                &UpdateStageRequest {
                    name: Some("Won".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(stage.name, "Won");
        let sent = transport.last();
        assert_eq!(sent.method, Method::Patch);
        assert_eq!(sent.url.path(), "/api/pipeline-stages/s1");
        assert_eq!(sent.body, RequestBody::Json(br#"{"name":"Won"}"#.to_vec()));
    }

    #[tokio::test]
    async fn reorder_is_a_put_with_ids() {
        let transport = RecordingTransport::replying(200, r#"{"data":[]}"#);
        let service = StageService::new(client_with(MemorySessionStore::new(), transport.clone()));

        service
            .reorder_stages(&ReorderStagesRequest {
                stage_ids: vec!["s2".into(), "s1".into()],
            })
            .await
            .unwrap();

        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url.path(), "/api/pipeline-stages/reorder");
        assert_eq!(
            sent.body,
            RequestBody::Json(br#"{"stage_ids":["s2","s1"]}"#.to_vec())
        );
    }

    #[tokio::test]
    async fn delete_tolerates_empty_body() {
        let transport = RecordingTransport::replying(204, "");
        let service = StageService::new(client_with(MemorySessionStore::new(), transport));

        service.delete_stage("s1").await.unwrap();
    }
}
