//! Welcome and health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /
pub async fn welcome() -> &'static str {
    "Welcome to the Security Management System"
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let backend = state.stores.backend_name();
    let (status, code, database) = match state.stores.health_check().await {
        Ok(true) => ("ok", StatusCode::OK, format!("{backend}: connected")),
        Ok(false) | Err(_) => (
            "degraded",
            StatusCode::SERVICE_UNAVAILABLE,
            format!("{backend}: unavailable"),
        ),
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
        }),
    )
}
