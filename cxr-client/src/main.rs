//! CXR upload client CLI.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cxr_client::{ApiClient, Config, ResultCache, TerminalView, UploadController};

fn usage() -> ! {
    eprintln!("usage: cxr-client <image-path>");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args_os().skip(1);
    let path = match args.next() {
        Some(arg) => PathBuf::from(arg),
        None => usage(),
    };
    if args.next().is_some() {
        usage();
    }

    let controller = UploadController::new(
        ApiClient::new(&config.server_url),
        ResultCache::new(&config.cache_path),
        Arc::new(TerminalView::new()),
    );

    controller.startup().await;
    controller.submit(&path).await?;

    Ok(())
}
