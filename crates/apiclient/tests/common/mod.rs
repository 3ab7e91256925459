//! In-process HTTP backend for integration tests.
//!
//! Every request is recorded; the reply is looked up by method and path,
//! defaulting to `404` with an error envelope.

#![allow(dead_code)]

use apiclient::{
    abstract_trait::{DynHttpTransport, DynSessionStorage},
    state::AppState,
    transport::ReqwestTransport,
};
use axum::{
    Router,
    body::{Bytes, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone, Default)]
pub struct MockBackend {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    replies: Arc<Mutex<HashMap<(Method, String), (StatusCode, String)>>>,
}

impl MockBackend {
    pub fn reply(&self, method: Method, path: &str, status: StatusCode, body: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> CapturedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }

    /// Serves the backend on an ephemeral port and returns its base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new().fallback(capture).with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend");
        });

        format!("http://{addr}")
    }
}

async fn capture(State(backend): State<MockBackend>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();

    let path = parts.uri.path().to_string();
    let reply = backend
        .replies
        .lock()
        .unwrap()
        .get(&(parts.method.clone(), path.clone()))
        .cloned();

    backend.requests.lock().unwrap().push(CapturedRequest {
        method: parts.method,
        path,
        query: parts.uri.query().map(str::to_owned),
        headers: parts.headers,
        body,
    });

    let (status, body) = reply.unwrap_or((
        StatusCode::NOT_FOUND,
        r#"{"error":{"message":"Route not mocked"}}"#.to_string(),
    ));

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

pub async fn app_state(base_url: &str, session: DynSessionStorage) -> AppState {
    let transport = Arc::new(ReqwestTransport::default()) as DynHttpTransport;
    AppState::from_parts(base_url, session, transport).await
}
