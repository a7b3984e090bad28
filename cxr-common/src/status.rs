//! Server status reporting.

use serde::{Deserialize, Serialize};

/// Body of `GET /` - whether a real model sits behind the gateway.
///
/// Recomputed per request; the client turns it into the status badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    pub status: String,
    pub model_loaded: bool,
}

impl ServerStatus {
    pub fn ok(model_loaded: bool) -> Self {
        Self {
            status: "ok".to_string(),
            model_loaded,
        }
    }
}
