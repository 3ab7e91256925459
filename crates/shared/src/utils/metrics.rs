use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "api_client_request_counter",
            "Total number of requests sent by the API client",
            self.request_counter.clone(),
        );
        registry.register(
            "api_client_request_duration",
            "Histogram of request durations for the API client",
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    pub fn count(&self, method: Method, status: Status) -> u64 {
        self.request_counter
            .get_or_create(&Labels { method, status })
            .get()
    }
}

/// Why a request went out without credentials.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum FallbackReason {
    Absent,
    Unreadable,
    Malformed,
    MissingToken,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct FallbackLabels {
    pub reason: FallbackReason,
}

/// Requests sent without credentials, by reason.
#[derive(Clone, Debug, Default)]
pub struct SessionDiagnostics {
    pub fallbacks: Family<FallbackLabels, Counter>,
}

impl SessionDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "session_fallback",
            "Requests sent without credentials, by reason",
            self.fallbacks.clone(),
        );
    }

    pub fn record(&self, reason: FallbackReason) {
        self.fallbacks
            .get_or_create(&FallbackLabels { reason })
            .inc();
    }

    pub fn count(&self, reason: FallbackReason) -> u64 {
        self.fallbacks
            .get_or_create(&FallbackLabels { reason })
            .get()
    }

    pub fn total(&self) -> u64 {
        [
            FallbackReason::Absent,
            FallbackReason::Unreadable,
            FallbackReason::Malformed,
            FallbackReason::MissingToken,
        ]
        .into_iter()
        .map(|reason| self.count(reason))
        .sum()
    }
}
