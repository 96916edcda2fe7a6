use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub const SERVICE_NAME: &str = "ai-hiring-service";

/// GET /
/// Service identification: banner message, crate version, start time.
pub async fn index_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "AI Service is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": &*state.started_at
    }))
}

/// GET /health
/// Liveness probe; succeeds whenever the process is serving requests.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": &*state.started_at
    }))
}
