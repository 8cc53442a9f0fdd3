use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Liveness HTTP server. Hosting platforms poll these endpoints to keep the
/// process awake and to check readiness.
pub async fn serve(
    state: Arc<AppState>,
    port: u16,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ping", get(ping))
        .route("/keepalive", get(keepalive))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("health server listening on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    Ok(())
}

async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "translation bot is running",
        "bot_ready": state.ready.load(Ordering::Relaxed),
        "uptime_secs": state.started_at.elapsed().as_secs(),
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "bot_ready": state.ready.load(Ordering::Relaxed),
    }))
}

async fn ping() -> &'static str {
    "pong"
}

async fn keepalive(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "alive": true,
        "uptime_secs": state.started_at.elapsed().as_secs(),
    }))
}
