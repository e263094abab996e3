//! Liveness endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET /api/status
pub async fn status() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "OK" })))
}
