use crate::builder::PreparedRequest;
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynHttpTransport = Arc<dyn HttpTransportTrait + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpTransportTrait {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ClientError>;
}
