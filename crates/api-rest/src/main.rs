//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, without loading a `.env` file.
//!
//! ## Intended use
//! Useful for development and debugging when the environment is already set up. The workspace's
//! main `bookcat-run` binary is the usual entry point.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::RestConfig;
use bookcat_core::CoreConfig;

/// Main entry point for the REST API server
///
/// # Environment Variables
/// - `BOOKCAT_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `BOOK_DATA_DIR`, `BOOKCAT_STORE`, `PHOTO_UPLOAD_DIR`, `PHOTO_URL_PREFIX`: see `CoreConfig`
/// - `BOOKCAT_CORS_ORIGIN`, `BOOKCAT_MAX_UPLOAD_BYTES`: see `RestConfig`
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - any setting is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("bookcat_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let lookup = |name: &str| std::env::var(name).ok();
    let cfg = Arc::new(CoreConfig::from_lookup(lookup)?);
    let rest = RestConfig::from_lookup(lookup)?;

    tracing::info!("-- Starting Bookcat REST API on {}", rest.addr);

    api_rest::serve(cfg, rest).await
}
