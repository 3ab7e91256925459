mod logs;
mod metadata;
mod metrics;
mod otel;

pub use self::logs::init_logger;
pub use self::metadata::HeaderInjector;
pub use self::metrics::{FallbackReason, Method, Metrics, SessionDiagnostics, Status};
pub use self::otel::{Telemetry, TracingContext};
