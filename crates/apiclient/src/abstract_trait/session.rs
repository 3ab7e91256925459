use async_trait::async_trait;
use shared::errors::SessionStoreError;
use std::sync::Arc;

pub type DynSessionStorage = Arc<dyn SessionStorageTrait + Send + Sync>;

/// Holds the serialized auth session as an opaque string.
#[async_trait]
pub trait SessionStorageTrait {
    async fn read(&self) -> Result<Option<String>, SessionStoreError>;
    async fn write(&self, raw: &str) -> Result<(), SessionStoreError>;
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
