//! vigild — the vigil daemon.
//!
//! Assembles the whole prober:
//! - TOML configuration (checks + global defaults)
//! - Shared HTTP client (one per process, uniform total timeout)
//! - Scheduler supervisor (one probe loop per check)
//! - Metric registry
//! - HTTP front-end (`/health`, `/metrics`)
//!
//! # Usage
//!
//! ```text
//! vigild --config conf/vigil.toml
//! VIGIL_CONFIG=conf/vigil.toml vigild
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use vigil_core::VigilConfig;
use vigil_probe::{HttpProber, Prober};
use vigil_registry::MetricRegistry;
use vigil_scheduler::Supervisor;

#[derive(Parser)]
#[command(name = "vigild", about = "Periodic HTTP health-check prober")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, env = "VIGIL_CONFIG", default_value = "conf/vigil.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config load failure is fatal; nothing is started without it.
    let config = VigilConfig::from_file(&cli.config)
        .with_context(|| format!("can't load configuration file {}", cli.config.display()))?;

    init_tracing(&config)?;

    run(config).await
}

/// Initialize tracing: env-filter from RUST_LOG or the configured
/// log level, stdout always, plus an append-mode log file when set.
fn init_tracing(config: &VigilConfig) -> anyhow::Result<()> {
    let directive = config.log_level.as_deref().unwrap_or("info");
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));

    let stdout = tracing_subscriber::fmt::layer();

    match &config.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("can't open log file {path}"))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Arc::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry().with(filter).with(stdout).init();
        }
    }
    Ok(())
}

async fn run(config: VigilConfig) -> anyhow::Result<()> {
    info!(
        checks = config.checks.len(),
        interval = config.interval,
        timeout = config.timeout,
        "vigil daemon starting"
    );

    // One HTTP client for every probe, total-request timeout included.
    let prober: Arc<dyn Prober> = Arc::new(HttpProber::new(config.request_timeout())?);
    let registry = MetricRegistry::new();

    let supervisor = Supervisor::start(
        &config.checks,
        config.interval,
        prober,
        registry.clone(),
    );

    let router = vigil_api::build_router(registry);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "front-end listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    // Stop the loops before the last prober handle drops: in-flight
    // probes hold their own client clones, so the client quiesces only
    // after they finish.
    supervisor.stop().await;

    info!("vigil daemon stopped");
    Ok(())
}
