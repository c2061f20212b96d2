//! Health API Module

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;

/// Health router
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Value>) {
    match state.employees.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok", "store": true }))),
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "store": false })),
            )
        }
    }
}
