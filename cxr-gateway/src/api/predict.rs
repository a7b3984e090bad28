//! Prediction endpoint.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;

use cxr_common::Prediction;

use crate::error::{Error, Result};
use crate::state::AppState;

/// POST /predict - classify one uploaded image.
///
/// Expects a multipart form with a `file` field holding the image bytes.
/// Decode failures are reported to the caller; they are never substituted
/// with a fallback prediction.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Prediction>> {
    let mut file_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let is_image = field
            .content_type()
            .is_some_and(|ct| ct.starts_with("image/"));
        if !is_image {
            return Err(Error::InvalidRequest("file must be an image".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::InvalidRequest(e.to_string()))?;
        file_bytes = Some(bytes);
        break;
    }

    let bytes = file_bytes
        .ok_or_else(|| Error::InvalidRequest("multipart field 'file' is required".to_string()))?;

    let image = image::load_from_memory(&bytes).map_err(|e| Error::InvalidImage(e.to_string()))?;

    tracing::debug!(bytes = bytes.len(), "Running classification");

    // Inference is CPU-bound; keep it off the async workers.
    let classifier = state.classifier.clone();
    let prediction = tokio::task::spawn_blocking(move || classifier.classify(&image))
        .await
        .map_err(|e| Error::Internal(e.to_string()))?
        .map_err(|e| Error::Inference(e.to_string()))?;

    Ok(Json(prediction))
}
