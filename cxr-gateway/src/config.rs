//! Configuration for the inference gateway.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure for the gateway.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Hard cap on the multipart request body.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Model selection. Leaving the path or format unset runs the stand-in
/// classifier instead of a real model.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ModelConfig {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub format: Option<ModelFormat>,
}

/// Recognized model artifact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// TorchScript module loaded through libtorch.
    Torch,
    /// ONNX graph executed by tract.
    Onnx,
}

impl ModelFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFormat::Torch => "torch",
            ModelFormat::Onnx => "onnx",
        }
    }
}

impl std::fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (CXR__SECTION__KEY format)
    /// 2. gateway.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("api.host", default_host())?
            .set_default("api.port", default_port() as i64)?
            .set_default("api.max_upload_bytes", default_max_upload_bytes() as i64)?
            .add_source(File::with_name("gateway").required(false))
            .add_source(
                Environment::with_prefix("CXR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_config() {
        let api = ApiConfig::default();
        assert_eq!(api.host, "0.0.0.0");
        assert_eq!(api.port, 8000);
        assert_eq!(api.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_default_model_config_is_unconfigured() {
        let model = ModelConfig::default();
        assert!(model.path.is_none());
        assert!(model.format.is_none());
    }

    #[test]
    fn test_model_format_parses_lowercase() {
        let parsed: ModelFormat = serde_json::from_str(r#""onnx""#).unwrap();
        assert_eq!(parsed, ModelFormat::Onnx);
        let parsed: ModelFormat = serde_json::from_str(r#""torch""#).unwrap();
        assert_eq!(parsed, ModelFormat::Torch);
    }

    #[test]
    fn test_model_format_rejects_unknown() {
        assert!(serde_json::from_str::<ModelFormat>(r#""keras""#).is_err());
    }
}
