use std::net::SocketAddr;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;
use shortener::config;
use shortener::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    if let Some(addr) = &config.metrics_listen {
        init_metrics(addr)?;
    }

    server::run(config).await
}

/// Installs the global subscriber. `RUST_LOG` directives win over `level`.
fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Installs the global `metrics` recorder and serves it for Prometheus at `addr`.
fn init_metrics(addr: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = addr.parse().context("Invalid METRICS_LISTEN address")?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("Failed to install Prometheus exporter")?;

    tracing::info!("Prometheus exporter listening on {}", addr);
    Ok(())
}
