use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use webpad_daemon::{config::DaemonConfig, http, service::PlaygroundService};
use webpad_storage_sqlite::SqliteStore;

#[derive(Debug, Parser)]
#[command(name = "webpad", version, about = "Local HTML/CSS/JS playground daemon")]
struct Cli {
    /// Where the HTTP API will listen, e.g. 127.0.0.1:8660
    #[arg(long)]
    listen: Option<String>,

    /// Directory holding the SQLite database (defaults to ~/.webpad).
    #[arg(long)]
    data_dir: Option<String>,

    /// Durable slot name the project is saved to.
    #[arg(long)]
    slot: Option<String>,

    /// Optional webpad.toml to read settings from; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DaemonConfig::load_from(path)?,
        None => DaemonConfig::default(),
    };
    if let Some(listen) = cli.listen {
        config.listen = listen;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(slot) = cli.slot {
        config.slot = slot;
    }

    info!("starting webpad with config: {:?}", config);

    let store = SqliteStore::open(&config.db_path())?;
    let svc = Arc::new(PlaygroundService::new(Box::new(store), config.slot.clone()));
    svc.bootstrap();

    // The editor surfaces are external clients, so cross-origin calls are
    // part of normal operation.
    let app = http::router(svc)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("shutdown signal received");
}
