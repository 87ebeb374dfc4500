//! md-cover-api - MusicBrainz proxy for the MiniDisc cover creator
//!
//! Serves:
//! - GET /api/search?q=...      release search
//! - GET /api/release/{id}      release media and tracks
//! - GET /api/health            liveness
//! - everything else            static frontend build

use anyhow::{Context, Result};
use md_cover_common::config::ServerConfig;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use md_cover_api::services::{MusicBrainzClient, UpstreamConfig};
use md_cover_api::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,md_cover_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification before anything that can fail
    info!(
        "Starting md-cover-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = ServerConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let musicbrainz = MusicBrainzClient::new(UpstreamConfig::default())
        .context("Failed to create MusicBrainz client")?;
    let upstream = musicbrainz.config();
    info!(
        base_url = %upstream.base_url,
        timeout_secs = upstream.timeout.as_secs(),
        "MusicBrainz upstream configured"
    );

    info!("Static assets: {}", config.static_dir.display());
    let app = build_router(AppState::new(musicbrainz, config.static_dir.clone()));

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return Err(e).with_context(|| format!("Failed to bind {}", addr));
        }
    };

    info!("Server starting on port {}...", config.port);
    info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
