//! Server status endpoint backing the client's badge.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use cxr_common::ServerStatus;

use crate::state::AppState;

/// GET / - reports whether a real model is loaded.
pub async fn server_status(State(state): State<Arc<AppState>>) -> Json<ServerStatus> {
    Json(ServerStatus::ok(state.classifier.is_real_model()))
}
