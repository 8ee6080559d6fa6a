use axum::{
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;

pub fn router() -> Router<()> {
    Router::new().route("/api/health", routing::get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness probe. There is no state to check, so responding at all means
/// everything this server needs is up.
async fn health() -> Response {
    Json(HealthResponse {
        status: "Server is running",
    })
    .into_response()
}
