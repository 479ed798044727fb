use crate::config::ObservabilityConfig;
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Initialize structured logging on stderr.
///
/// Frames own stdout, so logs never go there. `RUST_LOG` wins over the
/// configured level when it is set.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    tracing::debug!(json = config.json_logs, "procure-flow telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for one walkthrough session
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span wrapping one play session
pub fn create_session_span(session_id: &str, autoplay: bool, time_scale: f64) -> tracing::Span {
    tracing::info_span!(
        "walkthrough_session",
        session.id = session_id,
        autoplay = autoplay,
        time_scale = time_scale,
    )
}
