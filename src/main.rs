//! iso-bus - chain transfer to ISO 20022 pacs.008 bridge

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iso_bus::api::{create_router, AppState};
use iso_bus::config::{Config, DEFAULT_CONFIG_PATH};
use iso_bus::storage::FileStore;

#[derive(Parser, Debug)]
#[command(name = "iso-bus")]
#[command(about = "Translates chain transfer notifications into pacs.008 payment messages")]
struct Args {
    /// Config file path (YAML, JSON accepted as fallback)
    #[arg(long, env = "ISO_BUS_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Data directory override
    #[arg(long = "data", env = "ISO_BUS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level (overrides log_level from the config file)
    #[arg(long, env = "ISO_BUS_LOG_LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let args = Args::parse();

    // Load config before anything is served
    let config = Config::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?
        .with_data_dir_override(args.data_dir);

    // Initialize logging
    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting iso-bus v{}", env!("CARGO_PKG_VERSION"));

    let store = FileStore::open(&config.data_dir, config.storage.fsync)
        .context("creating data directory")?;
    let addr = config.listen_addr()?;

    let state = Arc::new(AppState {
        institution: config.institution.clone(),
        store: Arc::new(store),
        storage_policy: config.storage,
    });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!(
        addr = %addr,
        data_dir = %config.data_dir.display(),
        institution = %config.institution.name,
        strict_storage = config.storage.strict,
        "ISO-bus listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
