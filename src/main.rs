// ABOUTME: Entry point for the adrsmith binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use adrsmith_server::{AdrConfig, AppState, ProviderStatus, create_router};
use adrsmith_store::AdrStore;

/// Form-driven architecture decision assistant.
#[derive(Parser)]
#[command(name = "adrsmith", version)]
struct Cli {
    /// Socket address to bind (overrides ADRSMITH_BIND).
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Output directory for generated ADRs (overrides ADRSMITH_OUT).
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adrsmith=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AdrConfig::from_env().context("loading configuration")?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(out_dir) = cli.out_dir {
        config.out_dir = out_dir;
    }

    let store =
        AdrStore::open(&config.out_dir).context("opening the ADR output directory")?;
    tracing::info!("storing ADRs in {}", store.root().display());

    let provider_status = ProviderStatus::detect();
    if provider_status.any_available {
        tracing::info!("provider key detected, real mode available");
    } else {
        tracing::info!("no provider key detected, real mode needs a key pasted into the form");
    }

    let bind = config.bind;
    let state = Arc::new(AppState::new(store, config, provider_status));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {}", bind))?;
    tracing::info!("adrsmith listening on http://{}", bind);

    axum::serve(listener, app).await.context("serving HTTP")?;

    Ok(())
}
