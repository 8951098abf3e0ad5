//! Telemetry initialization: structured logging and metric descriptions

pub mod metrics;

use crate::config::TelemetryConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the logging stack and describe the crate's metrics.
///
/// Log records go to stderr so stdout stays free for command output.
/// Metrics are recorded through the `metrics` facade; they are only
/// exported if the host process installs a recorder.
pub fn init(config: &TelemetryConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "flock_core=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.log_format == "json" {
        // Flatten event fields so `message` is top-level in each record.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr);
        registry.with(fmt_layer).init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        registry.with(fmt_layer).init();
    }

    metrics::describe_metrics();

    tracing::debug!(service = %config.service_name, "Telemetry initialised");
}
