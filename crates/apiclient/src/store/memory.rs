use crate::{abstract_trait::session::SessionStorageTrait, domain::response::session::Session};
use async_trait::async_trait;
use shared::errors::SessionStoreError;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    raw: Arc<RwLock<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(RwLock::new(Some(raw.into()))),
        }
    }

    pub fn with_session(session: &Session) -> Result<Self, SessionStoreError> {
        Ok(Self::with_raw(serde_json::to_string(session)?))
    }
}

#[async_trait]
impl SessionStorageTrait for MemorySessionStore {
    async fn read(&self) -> Result<Option<String>, SessionStoreError> {
        Ok(self.raw.read().await.clone())
    }

    async fn write(&self, raw: &str) -> Result<(), SessionStoreError> {
        *self.raw.write().await = Some(raw.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        *self.raw.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemorySessionStore::new();
        let other = store.clone();

        store.write("{}").await.unwrap();
        assert_eq!(other.read().await.unwrap().as_deref(), Some("{}"));

        other.clear().await.unwrap();
        assert_eq!(store.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn with_session_serializes() {
        let store = MemorySessionStore::with_session(&Session::new("abc", "user-1")).unwrap();
        let raw = store.read().await.unwrap().unwrap();
        assert_eq!(Session::parse(&raw).unwrap().access_token(), Some("abc"));
    }
}
