use crate::abstract_trait::session::SessionStorageTrait;
use async_trait::async_trait;
use shared::errors::SessionStoreError;
use std::{io::ErrorKind, path::PathBuf};
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SessionStoreError {
        SessionStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl SessionStorageTrait for FileSessionStore {
    async fn read(&self) -> Result<Option<String>, SessionStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(data) if data.trim().is_empty() => {
                debug!("Session file is empty: {}", self.path.display());
                Ok(None)
            }
            Ok(data) => {
                debug!("Session read from {}", self.path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Session file not found: {}", self.path.display());
                Ok(None)
            }
            Err(e) => {
                error!("Failed to read session file {}: {:?}", self.path.display(), e);
                Err(self.io_error(e))
            }
        }
    }

    async fn write(&self, raw: &str) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!("Session written to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Session deleted: {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Failed to delete session {}: {:?}", self.path.display(), e);
                Err(self.io_error(e))
            }
        }
    }
}
