mod account;
mod conversation;
mod routing_rule;
mod stage;
mod team_member;

pub use self::account::AccountService;
pub use self::conversation::ConversationService;
pub use self::routing_rule::RoutingRuleService;
pub use self::stage::StageService;
pub use self::team_member::TeamMemberService;

use crate::{
    abstract_trait::transport::DynHttpTransport,
    builder::RequestBuilder,
    domain::requests::api::{ApiRequest, FormPayload, QueryParams},
};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use reqwest::header::HeaderMap;
use serde::{Serialize, de::DeserializeOwned};
use shared::{
    domain::responses::Envelope,
    errors::ClientError,
    utils::{HeaderInjector, Method, Metrics, SessionDiagnostics, Status, TracingContext},
};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    builder: RequestBuilder,
    transport: DynHttpTransport,
    metrics: Metrics,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("builder", &self.inner.builder)
            .field("transport", &"DynHttpTransport")
            .finish()
    }
}

impl ApiClient {
    pub fn new(builder: RequestBuilder, transport: DynHttpTransport, metrics: Metrics) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                builder,
                transport,
                metrics,
            }),
        }
    }

    pub fn register_metrics(&self, registry: &mut Registry) {
        self.inner.metrics.register(registry);
        self.inner.builder.diagnostics().register(registry);
    }

    pub fn base_url(&self) -> &str {
        self.inner.builder.base_url()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.inner.metrics
    }

    pub fn diagnostics(&self) -> &SessionDiagnostics {
        self.inner.builder.diagnostics()
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<T, ClientError> {
        let mut request = ApiRequest::new(Method::Get, path);
        request.query = query;
        self.send(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::json(Method::Post, path, body)?).await
    }

    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormPayload,
    ) -> Result<T, ClientError> {
        self.send(ApiRequest::form(Method::Post, path, form)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::json(Method::Put, path, body)?).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::json(Method::Patch, path, body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(ApiRequest::new(Method::Delete, path)).await
    }

    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ClientError> {
        let method = request.method;
        let operation = format!("{} {}", method.as_str(), request.path);

        let tracing_ctx = self.start_tracing(
            &operation,
            vec![
                KeyValue::new("http.request.method", method.as_str()),
                KeyValue::new("url.path", request.path.clone()),
            ],
        );

        let payload = match self.execute(&tracing_ctx, request).await {
            Ok(payload) => {
                self.complete_tracing_success(&tracing_ctx, method, &operation);
                payload
            }
            Err(err) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("{operation}: {err}"),
                );
                return Err(err);
            }
        };

        serde_json::from_value(payload).map_err(ClientError::Decode)
    }

    async fn execute(
        &self,
        tracing_ctx: &TracingContext,
        request: ApiRequest,
    ) -> Result<serde_json::Value, ClientError> {
        let mut prepared = self.inner.builder.build(request).await?;

        self.inject_trace_context(&tracing_ctx.cx, &mut prepared.headers);

        let response = self.inner.transport.execute(prepared).await?;

        Envelope::decode(response.status, response.reason.as_deref(), &response.body)?
            .into_result()
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("api-client")
    }

    fn inject_trace_context(&self, cx: &Context, headers: &mut HeaderMap) {
        global::get_text_map_propagator(|propagator| {
            propagator.inject_context(cx, &mut HeaderInjector(headers))
        });
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Client)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting request: {operation_name}");

        span.add_event(
            "Request started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Request completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("Request completed successfully: {message}");
        } else {
            error!("Request failed: {message}");
        }

        self.inner.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}
