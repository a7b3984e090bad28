//! Upload/preview/result controller.

use std::path::Path;
use std::sync::Arc;

use image::GenericImageView;

use crate::api::ApiClient;
use crate::cache::ResultCache;
use crate::validate;
use crate::view::{Badge, Preview, View};

/// Message shown for any network or server failure.
const GENERIC_FAILURE: &str = "Prediction failed. Please try again.";

/// Drives the upload-to-result flow against injected UI handles.
pub struct UploadController {
    api: ApiClient,
    cache: ResultCache,
    view: Arc<dyn View>,
}

impl UploadController {
    pub fn new(api: ApiClient, cache: ResultCache, view: Arc<dyn View>) -> Self {
        Self { api, cache, view }
    }

    /// Page-load behavior: best-effort cache read and status probe.
    ///
    /// Never fails; every problem here is logged and swallowed.
    pub async fn startup(&self) {
        match self.cache.load() {
            Ok(Some(cached)) => {
                tracing::info!(
                    "Last result: {} at {:.1}% ({})",
                    cached.prediction.predicted_class,
                    cached.prediction.confidence,
                    cached.cached_at
                );
            }
            Ok(None) => {}
            Err(e) => tracing::debug!("Could not read cached result: {}", e),
        }

        let badge = match self.api.status().await {
            Ok(status) if status.model_loaded => Badge::ModelLoaded,
            Ok(_) => Badge::ModelNotLoaded,
            Err(e) => {
                tracing::debug!("Status probe failed: {}", e);
                Badge::Offline
            }
        };
        self.view.set_badge(badge);
    }

    /// Handle one selected file end to end.
    ///
    /// Validation failures stop before any network call. The loading state is
    /// cleared on every exit path of the request.
    pub async fn submit(&self, path: &Path) -> std::io::Result<()> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let mime = match validate::validate_upload(
            validate::mime_for_path(path),
            bytes.len() as u64,
        ) {
            Ok(mime) => mime,
            Err(rejection) => {
                self.view.show_error(&rejection.to_string());
                return Ok(());
            }
        };

        // Preview is best-effort; the server stays the decode authority.
        let dimensions = image::load_from_memory(&bytes)
            .map(|img| img.dimensions())
            .ok();
        self.view.show_preview(&Preview {
            file_name: file_name.clone(),
            size_bytes: bytes.len() as u64,
            dimensions,
        });

        self.view.set_loading(true);
        let outcome = self.api.predict(bytes, &file_name, mime).await;
        self.view.set_loading(false);

        match outcome {
            Ok(prediction) => {
                self.view.show_result(&prediction);
                if let Err(e) = self.cache.save(&prediction) {
                    tracing::warn!("Could not cache result: {}", e);
                }
            }
            Err(e) => {
                tracing::debug!("Predict call failed: {}", e);
                self.view.show_error(GENERIC_FAILURE);
            }
        }

        Ok(())
    }
}
