//! # Learning Center - Students and Profiles service
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring            │
//! │    │                                                            │
//! │    ├── Loads: AppConfig (defaults → file → env → flags)         │
//! │    ├── Creates: Database (adapter, optional JSON snapshot)      │
//! │    ├── Creates: AppState (services + profiles facade)           │
//! │    └── Runs: axum HTTP server                                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use center_adapter::controller::http::{router, AppState};
use center_adapter::repository::Database;
use center_domain::SystemClock;
use clap::Parser;
use shared::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "learning-center")]
#[command(about = "Learning Center - Students and Profiles REST service")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides config and environment)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// JSON snapshot file for persistent storage
    #[arg(long)]
    data_file: Option<PathBuf>,
}

impl Cli {
    /// Flags win over every other source
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(bind) = self.bind {
            config.bind_address = bind;
        }
        if let Some(path) = &self.data_file {
            config.data_file = Some(path.clone());
        }
        config
    }
}

fn open_database(config: &AppConfig) -> anyhow::Result<Database> {
    match &config.data_file {
        Some(path) => Database::open(path)
            .with_context(|| format!("opening data file {}", path.display())),
        None => {
            info!("no data file configured, storage is in-memory only");
            Ok(Database::in_memory())
        }
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(
        AppConfig::load(cli.config.as_deref()).context("loading configuration")?,
    );

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Learning Center - Students & Profiles");

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let db = open_database(&config)?;
    let state = AppState::new(db, Arc::new(SystemClock));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("binding {}", config.bind_address))?;
    info!(address = %config.bind_address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("stopped");
    Ok(())
}
