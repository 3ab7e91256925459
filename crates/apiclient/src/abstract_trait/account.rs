use crate::domain::{
    requests::account::ConnectAccountRequest,
    response::account::{AccountResponse, ConnectAccountResponse, SyncStatusResponse},
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynAccountClient = Arc<dyn AccountClientTrait + Send + Sync>;

#[async_trait]
pub trait AccountClientTrait {
    async fn find_all(&self) -> Result<Vec<AccountResponse>, ClientError>;
    async fn find_by_id(&self, id: &str) -> Result<AccountResponse, ClientError>;
    async fn connect(
        &self,
        req: &ConnectAccountRequest,
    ) -> Result<ConnectAccountResponse, ClientError>;
    async fn sync(&self, id: &str) -> Result<SyncStatusResponse, ClientError>;
    async fn disconnect(&self, id: &str) -> Result<(), ClientError>;
}
