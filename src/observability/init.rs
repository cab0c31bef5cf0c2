//! Tracing initialization and subscriber setup.

use super::exporter::{self, SERVICE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File the span exporter writes to, inside the configured data directory.
pub const TRACE_FILE_NAME: &str = "tablescout-traces.json";

/// Initializes the tracing subscriber with file-based span export.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by `RUST_LOG`, falling back to `config.trace_level`
/// 2. Exports finished spans as JSON lines to `<data_dir>/tablescout-traces.json`
/// 3. Optionally prints events to stderr when `config.log_to_stderr` is set
///
/// Observability is optional: if the data directory cannot be created the
/// function returns without installing anything. Calling it again after a
/// subscriber is installed has no effect.
///
/// # Example
///
/// ```rust
/// use tablescout::observability::init_tracing;
/// use tablescout::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     data_dir: dir.path().to_path_buf(),
///     trace_level: "debug".to_string(),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    if let Err(e) = std::fs::create_dir_all(&config.data_dir) {
        eprintln!(
            "tablescout: tracing disabled, cannot create {}: {e}",
            config.data_dir.display()
        );
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.trace_level));

    let provider = exporter::create_tracer_provider(config.data_dir.join(TRACE_FILE_NAME));
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let stderr_layer = config.log_to_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(stderr_layer)
        .try_init();
}
