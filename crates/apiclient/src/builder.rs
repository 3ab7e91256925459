use crate::{
    abstract_trait::session::DynSessionStorage,
    domain::{
        requests::api::{ApiRequest, QueryParams, RequestBody},
        response::session::Session,
    },
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use shared::{
    errors::ClientError,
    utils::{FallbackReason, Method, SessionDiagnostics},
};
use tracing::{debug, warn};
use url::Url;

pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");
pub const USER_ROLE_HEADER: HeaderName = HeaderName::from_static("x-user-role");

#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// An unusable session never fails the request; it is sent without
/// credentials and counted in [`SessionDiagnostics`].
#[derive(Clone)]
pub struct RequestBuilder {
    base_url: String,
    session: DynSessionStorage,
    diagnostics: SessionDiagnostics,
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("base_url", &self.base_url)
            .field("session", &"DynSessionStorage")
            .finish()
    }
}

impl RequestBuilder {
    pub fn new(
        base_url: impl Into<String>,
        session: DynSessionStorage,
        diagnostics: SessionDiagnostics,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            session,
            diagnostics,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn diagnostics(&self) -> &SessionDiagnostics {
        &self.diagnostics
    }

    pub async fn build(&self, request: ApiRequest) -> Result<PreparedRequest, ClientError> {
        let url = self.url_for(&request.path, request.query.as_ref())?;

        let mut headers = self.auth_headers().await;

        if !request.body.is_form() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(PreparedRequest {
            method: request.method,
            url,
            headers,
            body: request.body,
        })
    }

    pub fn url_for(&self, path: &str, query: Option<&QueryParams>) -> Result<Url, ClientError> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;

        if let Some(query) = query.filter(|query| !query.is_empty()) {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }

    async fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        let Some(session) = self.load_session().await else {
            return headers;
        };

        match session.access_token() {
            Some(token) => insert_header(&mut headers, AUTHORIZATION, &format!("Bearer {token}")),
            None => {
                warn!("Stored session has no access token; sending request unauthenticated");
                self.diagnostics.record(FallbackReason::MissingToken);
            }
        }

        if let Some(user_id) = session.user_id() {
            insert_header(&mut headers, USER_ID_HEADER, user_id);
        }

        if let Some(role) = session.role() {
            insert_header(&mut headers, USER_ROLE_HEADER, role);
        }

        headers
    }

    async fn load_session(&self) -> Option<Session> {
        let raw = match self.session.read().await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored session; sending request unauthenticated");
                self.diagnostics.record(FallbackReason::Absent);
                return None;
            }
            Err(e) => {
                warn!("Failed to read stored session, sending request unauthenticated: {e}");
                self.diagnostics.record(FallbackReason::Unreadable);
                return None;
            }
        };

        match Session::parse(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Stored session is malformed, sending request unauthenticated: {e}");
                self.diagnostics.record(FallbackReason::Malformed);
                None
            }
        }
    }
}

fn insert_header(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(_) => warn!("Skipping header {name}: value is not a valid header value"),
    }
}
