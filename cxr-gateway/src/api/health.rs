//! Health check endpoint.

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// GET /health - liveness check.
pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
