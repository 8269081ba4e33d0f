//! Health server implementation.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use super::HealthStatus;
use crate::error::ServerError;
use crate::startup::ServerConfig;

/// Shared state for the health handlers.
#[derive(Debug, Clone, Copy)]
pub struct HealthServerState {
    /// When the process started; uptime is measured from here
    pub started_at: Instant,
}

/// Build the health router.
pub fn health_router(started_at: Instant) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(HealthServerState { started_at })
}

/// Start the health server with the given configuration.
///
/// Returns the server task and the address actually bound.
pub async fn start_health_server(
    config: &ServerConfig,
    started_at: Instant,
) -> Result<(JoinHandle<()>, SocketAddr), ServerError> {
    start_health_server_on(config.socket_addr(), started_at).await
}

/// Start the health server on a specific address.
///
/// Binding port 0 picks a free port; the returned address has the real one.
pub async fn start_health_server_on(
    addr: SocketAddr,
    started_at: Instant,
) -> Result<(JoinHandle<()>, SocketAddr), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let actual_addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    tracing::info!("Health monitoring server running on http://{}", actual_addr);
    tracing::info!("Health endpoint available at http://{}/health", actual_addr);

    let app = health_router(started_at);
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

/// Handler for `GET /health`.
async fn health_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::healthy(state.started_at)))
}
