use crate::{
    abstract_trait::{DynHttpTransport, DynSessionStorage},
    builder::RequestBuilder,
    di::DependenciesInject,
    service::ApiClient,
    store::FileSessionStore,
    transport::ReqwestTransport,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    config::Config,
    utils::{Metrics, SessionDiagnostics},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub session: DynSessionStorage,
    pub api_client: ApiClient,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session", &"DynSessionStorage")
            .field("api_client", &self.api_client)
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        info!(
            "Initializing API client for {} (session file: {})",
            config.api_base_url,
            config.session_file.display()
        );

        let session = Arc::new(FileSessionStore::new(config.session_file.clone())) as DynSessionStorage;

        let http_client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        let transport = Arc::new(ReqwestTransport::new(http_client)) as DynHttpTransport;

        Ok(Self::from_parts(&config.api_base_url, session, transport).await)
    }

    pub async fn from_parts(
        base_url: &str,
        session: DynSessionStorage,
        transport: DynHttpTransport,
    ) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));

        let builder = RequestBuilder::new(base_url, session.clone(), SessionDiagnostics::new());
        let api_client = ApiClient::new(builder, transport, Metrics::new());

        api_client.register_metrics(&mut *registry.lock().await);

        let di_container = DependenciesInject::new(api_client.clone());

        Self {
            session,
            api_client,
            di_container,
            registry,
        }
    }
}
