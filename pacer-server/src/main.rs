//! # Pacer Server
//!
//! Runner submission and race-day analytics over HTTP.
//!
//! Records are stored in PostgreSQL when `DATABASE_URL` is set and in
//! memory otherwise. Every report is computed on request from a snapshot of
//! the store.

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use pacer_server::{
    infra::{config::Config, startup::build_state},
    routes,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "pacer-server")]
#[command(about = "Marathon runner submission and analytics server")]
struct Cli {
    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// PostgreSQL connection string (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Directory of static assets served at `/`
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server_host = host;
        }
        if let Some(port) = self.port {
            config.server_port = port;
        }
        if let Some(url) = self.database_url {
            config.database_url = Some(url);
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = Some(dir);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    let bind_address = config.bind_address();
    let state = build_state(config).await?;
    let router = routes::create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
