//! Static host for the compiled knowledge bank client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a pure client-side Leptos bundle produced by Trunk. This
//! binary only serves that bundle from disk; it renders nothing and keeps no
//! state between requests.

mod config;
mod routes;

use std::net::SocketAddr;
use std::process::ExitCode;

use crate::config::{ConfigError, ServeConfig};

/// Startup and runtime failures surfaced to `main`.
#[derive(Debug, thiserror::Error)]
enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "knowledge-bank stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let config = ServeConfig::from_env()?;
    let addr = config.socket_addr();

    let app = routes::app(&config.static_dir);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "knowledge-bank listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
