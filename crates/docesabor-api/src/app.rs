//! Application builder: wires router + middleware + state into an Axum app.

use std::future::IntoFuture;
use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;
use tokio::sync::watch;
use tracing::{error, info, warn};

use docesabor_core::config::AppConfig;
use docesabor_core::error::{AppError, ErrorKind};
use docesabor_core::result::AppResult;
use docesabor_database::Stores;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::{AppState, build_mailer};

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}

/// Runs the Doce Sabor server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting Doce Sabor server...");

    // ── Step 1: Stores ───────────────────────────────────────────
    let stores = Stores::from_config(&config.database).await?;

    // ── Step 2: Mail dispatcher ──────────────────────────────────
    let mailer = build_mailer(&config.mail)?;

    // ── Step 3: Services and state ───────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::new(config, stores.clone(), mailer)?;

    // ── Step 4: Serve ────────────────────────────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, format!("Failed to bind {addr}"), e)
    })?;
    info!("Doce Sabor server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();

    // In-flight requests get `grace` to finish once the signal arrives.
    let deadline = async move {
        if shutdown_rx.wait_for(|stopping| *stopping).await.is_ok() {
            tokio::time::sleep(grace).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;
        }
        _ = deadline => {
            warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, dropping open connections");
        }
    }

    stores.close().await;
    info!("Doce Sabor server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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
