use crate::domain::{
    requests::stage::{CreateStageRequest, ReorderStagesRequest, UpdateStageRequest},
    response::stage::StageResponse,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynStageClient = Arc<dyn StageClientTrait + Send + Sync>;

#[async_trait]
pub trait StageClientTrait {
    async fn find_all(&self) -> Result<Vec<StageResponse>, ClientError>;
    async fn create_stage(&self, req: &CreateStageRequest) -> Result<StageResponse, ClientError>;
    async fn update_stage(
        &self,
        id: &str,
        req: &UpdateStageRequest,
    ) -> Result<StageResponse, ClientError>;
    async fn reorder_stages(
        &self,
        req: &ReorderStagesRequest,
    ) -> Result<Vec<StageResponse>, ClientError>;
    async fn delete_stage(&self, id: &str) -> Result<(), ClientError>;
}
