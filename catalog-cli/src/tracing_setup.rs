//! Log output for the `catalog` binary
//!
//! One subscriber: env filter, compact console output, and (with the
//! `telemetry` feature and `--otel`) an OTLP span exporter layered on top.
//!
//! `RUST_LOG` always wins over `--debug`. The exporter reads
//! `OTEL_EXPORTER_OTLP_ENDPOINT` (default http://localhost:4317) and
//! `OTEL_SERVICE_NAME` (default catalog).

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub debug: bool,
    pub otel: bool,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if self.debug { "debug" } else { "info" }))
    }
}

/// Install the global subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.filter()).with(
        tracing_subscriber::fmt::layer()
            .with_target(config.debug)
            .compact(),
    );

    #[cfg(feature = "telemetry")]
    let registry = registry.with(if config.otel {
        Some(otlp::layer()?)
    } else {
        None
    });

    registry.try_init().map_err(|err| anyhow!(err))?;

    if config.otel && cfg!(not(feature = "telemetry")) {
        tracing::warn!("--otel ignored: built without the `telemetry` feature");
    }

    Ok(())
}

/// Flush pending spans before exit.
pub fn shutdown_otel() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(feature = "telemetry")]
mod otlp {
    use anyhow::{anyhow, Result};
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;
    use tracing::Subscriber;
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::Layer;

    fn env_or(key: &str, default: &str) -> String {
        std::env::var(key).unwrap_or_else(|_| default.to_owned())
    }

    /// Build the span-export layer and register its provider globally.
    pub fn layer<S>() -> Result<impl Layer<S>>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let endpoint = env_or("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317");
        let service = env_or("OTEL_SERVICE_NAME", "catalog");

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(&endpoint)
            .build()
            .map_err(|e| anyhow!("OTLP exporter for {endpoint}: {e}"))?;

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
            .with_resource(opentelemetry_sdk::Resource::new([KeyValue::new(
                "service.name",
                service,
            )]))
            .build();

        let tracer = provider.tracer("catalog");
        // The global handle keeps the provider (and its exporter) alive
        let _ = opentelemetry::global::set_tracer_provider(provider);

        Ok(tracing_opentelemetry::layer().with_tracer(tracer))
    }
}
