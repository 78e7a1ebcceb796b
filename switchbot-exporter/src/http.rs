//! HTTP server for the scrape endpoint.
//!
//! The exporter serves a single route. Prometheus names the device to probe
//! with the `target` query parameter and each request is answered from a
//! registry built for that request alone.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use switchbot_api::Client;

use crate::scrape::{build_registry, encode_registry};

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    client: Arc<Client>,
}

/// Query parameters accepted by the scrape endpoint.
#[derive(Debug, Deserialize)]
struct ScrapeParams {
    target: Option<String>,
}

/// Create the HTTP router.
fn create_router(client: Arc<Client>, metrics_path: &str) -> Router {
    let state = AppState { client };

    Router::new()
        .route(metrics_path, get(scrape_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for one scrape.
///
/// Resolves the target's display name, fetches its reading, and renders a
/// request-scoped registry. A target that cannot be named is the caller's
/// error; a named target whose reading cannot be fetched is ours. Upstream
/// detail goes to the log, not the response body.
async fn scrape_handler(
    State(state): State<AppState>,
    Query(params): Query<ScrapeParams>,
) -> Response {
    let target = match params.target.as_deref() {
        Some(target) if !target.is_empty() => target,
        _ => {
            return (StatusCode::BAD_REQUEST, "Target parameter is missing").into_response();
        }
    };

    let device_name = match state.client.device_name(target).await {
        Ok(name) => name,
        Err(e) => {
            warn!(target = %target, error = %e, "Device name resolution failed");
            return (StatusCode::BAD_REQUEST, "Bad Request").into_response();
        }
    };

    let reading = match state.client.thermometer_status(target).await {
        Ok(reading) => reading,
        Err(e) => {
            error!(target = %target, error = %e, "Reading fetch failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error").into_response();
        }
    };

    let body = match build_registry(&device_name, target, &reading)
        .and_then(|registry| encode_registry(&registry))
    {
        Ok(body) => body,
        Err(e) => {
            error!(target = %target, error = %e, "Metrics rendering failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error").into_response();
        }
    };

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

/// HTTP server configuration.
pub struct HttpServer {
    client: Arc<Client>,
    listen_addr: SocketAddr,
    metrics_path: String,
}

impl HttpServer {
    /// Create a new HTTP server.
    pub fn new(client: Arc<Client>, listen_addr: SocketAddr, metrics_path: String) -> Self {
        Self {
            client,
            listen_addr,
            metrics_path,
        }
    }

    /// Run the HTTP server until the shutdown signal is received.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> anyhow::Result<()> {
        let router = create_router(self.client, &self.metrics_path);

        let listener = tokio::net::TcpListener::bind(self.listen_addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", self.listen_addr, e))?;

        info!(
            addr = %self.listen_addr,
            path = %self.metrics_path,
            "HTTP server listening"
        );

        // Run server with graceful shutdown
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                // Wait for shutdown signal
                loop {
                    if shutdown.changed().await.is_err() {
                        break;
                    }
                    if *shutdown.borrow() {
                        break;
                    }
                }
                info!("HTTP server shutting down");
            })
            .await
            .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
