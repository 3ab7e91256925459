use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}
