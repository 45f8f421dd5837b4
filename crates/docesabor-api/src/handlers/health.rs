//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /
pub async fn root() -> &'static str {
    "API: Doce Sabor"
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_up = state.stores.health_check().await;
    Json(HealthResponse {
        status: if database_up { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database_up { "up" } else { "down" }.to_string(),
    })
}
