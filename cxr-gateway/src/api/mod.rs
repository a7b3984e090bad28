//! HTTP API for the inference gateway.

pub mod health;
pub mod predict;
pub mod status;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(status::server_status))
        .route("/health", get(health::health))
        .route("/predict", post(predict::predict))
}
