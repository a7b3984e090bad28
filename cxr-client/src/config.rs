use std::env;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gateway base URL (default: http://localhost:8000)
    pub server_url: String,
    /// Path of the cached last-result file (default: last_prediction.json)
    pub cache_path: String,
    /// Log level (default: info)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default, so loading never fails.
    pub fn from_env() -> Self {
        Config {
            server_url: env::var("CXR_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            cache_path: env::var("CXR_CACHE_PATH")
                .unwrap_or_else(|_| "last_prediction.json".to_string()),
            log_level: env::var("CXR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
