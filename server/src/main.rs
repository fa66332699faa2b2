#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use std::process::ExitCode;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    match config.backend_url.as_deref() {
        Some(upstream) => tracing::info!(%upstream, timeout_secs = config.proxy_timeout_secs, "api proxy enabled"),
        None => tracing::warn!("BACKEND_URL not set; /api requests will answer 404"),
    }

    let state = state::AppState::new(&config)?;
    let app = routes::app(state)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| StartupError::Bind { port, source })?;

    tracing::info!(%port, "clinic site listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
