use crate::{
    abstract_trait::account::AccountClientTrait,
    domain::{
        requests::{account::ConnectAccountRequest, api::item_path},
        response::account::{AccountResponse, ConnectAccountResponse, SyncStatusResponse},
    },
    service::ApiClient,
};
use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde_json::json;
use shared::errors::ClientError;
use tracing::info;

const ACCOUNTS_PATH: &str = "/api/accounts";

#[derive(Debug, Clone)]
pub struct AccountService {
    client: ApiClient,
}

impl AccountService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountClientTrait for AccountService {
    async fn find_all(&self) -> Result<Vec<AccountResponse>, ClientError> {
        info!("Retrieving connected accounts");

        let accounts: Vec<AccountResponse> = self.client.get(ACCOUNTS_PATH, None).await?;

        info!("Successfully fetched {} accounts", accounts.len());
        Ok(accounts)
    }

    async fn find_by_id(&self, id: &str) -> Result<AccountResponse, ClientError> {
        info!("Retrieving account {id}");

        self.client
            .get(&item_path(ACCOUNTS_PATH, id), None)
            .await
    }

    async fn connect(
        &self,
        req: &ConnectAccountRequest,
    ) -> Result<ConnectAccountResponse, ClientError> {
        info!("Requesting hosted auth link for provider {:?}", req.provider);

        self.client
            .post(&format!("{ACCOUNTS_PATH}/connect"), req)
            .await
    }

    async fn sync(&self, id: &str) -> Result<SyncStatusResponse, ClientError> {
        info!("Triggering sync for account {id}");

        let status: SyncStatusResponse = self
            .client
            .post(&format!("{}/sync", item_path(ACCOUNTS_PATH, id)), &json!({}))
            .await?;

        info!("Sync for account {id} is {}", status.status);
        Ok(status)
    }

    async fn disconnect(&self, id: &str) -> Result<(), ClientError> {
        info!("Disconnecting account {id}");

        let _: IgnoredAny = self.client.delete(&item_path(ACCOUNTS_PATH, id)).await?;

        info!("Account {id} disconnected");
        Ok(())
    }
}
