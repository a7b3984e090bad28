//! HTTP client for the inference gateway.

use reqwest::multipart::{Form, Part};
use reqwest::Client;

use cxr_common::{Prediction, ServerStatus};

/// Errors from gateway calls.
///
/// The controller folds all of these into one generic user-facing message;
/// the variants exist for diagnostics logging.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

/// Client for the CXR gateway API.
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST /predict with the image bytes as the `file` multipart field.
    pub async fn predict(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        mime: &str,
    ) -> Result<Prediction, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .http_client
            .post(format!("{}/predict", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json::<Prediction>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// GET / - the status probe behind the client badge.
    pub async fn status(&self) -> Result<ServerStatus, ApiError> {
        let response = self
            .http_client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json::<ServerStatus>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}
