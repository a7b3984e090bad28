//! CXR inference gateway - wraps a chest X-ray classifier behind a single
//! HTTP endpoint.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cxr_gateway::config::Config;
use cxr_gateway::state::AppState;
use cxr_gateway::{api, classifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load().map_err(|e| {
        format!(
            "Failed to load configuration: {}. \
             Check gateway.toml or the CXR__API__* / CXR__MODEL__* environment variables.",
            e
        )
    })?;

    // Select the classifier once, before accepting traffic
    let classifier = classifier::from_config(&config.model)?;
    tracing::info!("Classifier ready: {}", classifier.kind());

    let state = Arc::new(AppState::new(classifier));

    // Build router
    let app = api::router()
        .layer(DefaultBodyLimit::max(config.api.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.api.host, config.api.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
