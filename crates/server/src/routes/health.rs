//! Health check handler.

use axum::Json;
use chrono::Utc;

use veloce_core::HealthResponse;

/// Liveness health check endpoint.
///
/// Reports that the server is up, with the current timestamp. Does not
/// touch storage.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        timestamp: Utc::now(),
    })
}
