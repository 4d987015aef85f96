use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::RestConfig;
use bookcat_core::{CoreConfig, StoreKind};

/// Main entry point for the book catalog
///
/// Loads `.env` if present, resolves configuration once and serves the REST API with Swagger UI
/// and the uploaded photo files.
///
/// # Environment Variables
/// - `BOOKCAT_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `BOOK_DATA_DIR`: Directory for book records (default: "book_data")
/// - `BOOKCAT_STORE`: `file` (default) or `memory`
/// - `PHOTO_UPLOAD_DIR`: Directory uploaded photos are written to (default: "uploads/photos")
/// - `PHOTO_URL_PREFIX`: URL path photos are served under (default: "/uploads/photos")
/// - `BOOKCAT_CORS_ORIGIN`: Single allowed origin; permissive CORS when unset
/// - `BOOKCAT_MAX_UPLOAD_BYTES`: Request body limit (default: 10 MiB)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bookcat_run=info".parse()?)
                .add_directive("bookcat_core=info".parse()?)
                .add_directive("bookcat_files=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let lookup = |name: &str| std::env::var(name).ok();
    let cfg = Arc::new(CoreConfig::from_lookup(lookup)?);
    let rest = RestConfig::from_lookup(lookup)?;

    match cfg.store_kind() {
        StoreKind::File => tracing::info!(
            "++ Using JSON file store under {}",
            cfg.book_data_dir().display()
        ),
        StoreKind::Memory => {
            tracing::warn!("++ Using in-memory store; books are lost when the process exits")
        }
    }
    tracing::info!("++ Starting Bookcat REST on {}", rest.addr);

    api_rest::serve(cfg, rest).await
}
