//! Titanic Dashboard - backend binary
//!
//! Serves a synthetic passenger dataset over REST and pushes simulated live
//! metrics to WebSocket clients.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐   Dataset (Arc)   ┌────────────────────┐
//! │   startup      │ ────────────────► │   Axum server      │
//! │   generate()   │                   │   REST + /ws       │
//! └────────────────┘                   └─────────┬──────────┘
//!                                                │ ClientRegistry
//!                                      ┌─────────▼──────────┐
//!                                      │ MetricsBroadcaster │
//!                                      │ (background task)  │
//!                                      └────────────────────┘
//! ```
//!
//! A dataset that fails validation aborts startup before the listener binds.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use dataset::DatasetConfig;
use server::{
    BroadcasterConfig, ClientRegistry, MetricsBroadcaster, MetricsGenerator, ServerConfig,
    ServerState, create_app,
};

/// Titanic Dashboard - passenger statistics with live metrics
#[derive(Parser, Debug)]
#[command(name = "titanic-dashboard")]
#[command(about = "Demonstration dashboard backend: REST statistics and live WebSocket metrics")]
#[command(version)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = server::app::DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = server::app::DEFAULT_PORT)]
    port: u16,

    /// Number of synthetic passengers to generate
    #[arg(long, env = "DASHBOARD_PASSENGERS", default_value_t = dataset::config::DEFAULT_SIZE)]
    passengers: usize,

    /// Seed for the dataset and live metrics (random if unset)
    #[arg(long, env = "DASHBOARD_SEED")]
    seed: Option<u64>,

    /// Milliseconds between live metrics broadcasts
    #[arg(long, env = "DASHBOARD_METRICS_INTERVAL_MS", default_value_t = 3000)]
    metrics_interval_ms: u64,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }

    fn dataset_config(&self) -> DatasetConfig {
        DatasetConfig {
            size: self.passengers,
            seed: self.seed,
            ..DatasetConfig::default()
        }
    }

    fn broadcaster_config(&self) -> BroadcasterConfig {
        BroadcasterConfig {
            period: Duration::from_millis(self.metrics_interval_ms.max(1)),
            // Offset so the gauges do not replay the dataset's draws
            seed: self.seed.map(|s| s.wrapping_add(1)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let dataset =
        dataset::generate(&args.dataset_config()).context("failed to generate passenger dataset")?;
    let survival_rate = analytics::summary_statistics(&dataset).survival_rate;
    info!(
        passengers = dataset.len(),
        seed = ?args.seed,
        survival_rate,
        "dataset ready"
    );

    let registry = Arc::new(ClientRegistry::new());
    let broadcaster_config = args.broadcaster_config();
    let generator =
        MetricsGenerator::new(survival_rate, dataset.len() as u64, broadcaster_config.seed);
    let broadcaster =
        MetricsBroadcaster::new(registry.clone(), generator, broadcaster_config.period).spawn();

    let state = ServerState::with_registry(dataset, registry);
    let app = create_app(state);

    let addr = args.server_config().bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Backend running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    broadcaster.abort();
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
