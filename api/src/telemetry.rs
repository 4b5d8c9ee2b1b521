//! Structured logs for the fixture server. `RUST_LOG` overrides the
//! default filter.

use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Request spans are logged on close, so every line carries the endpoint
/// and its latency.
pub fn get_subscriber(default_filter: &str) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let stderr = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_span_events(fmt::format::FmtSpan::CLOSE);
    Registry::default().with(env_filter).with(stderr)
}

/// Install `subscriber` globally and route `log` records into it. Fails if
/// either was already installed.
pub fn init_subscriber(
    subscriber: impl Subscriber + Sync + Send,
) -> anyhow::Result<()> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
