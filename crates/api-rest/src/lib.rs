//! # API REST
//!
//! REST API implementation for the book catalog.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelopes, status codes, CORS, static photo serving)
//!
//! Uses `api-shared` for wire types and `bookcat-core` for every data operation.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod handlers;

pub use config::RestConfig;
pub use error::ApiError;

use api_shared::envelope::{
    BookDetailsEnvelope, BookEnvelope, BookListEnvelope, EmptyEnvelope, PhotoUrlEnvelope,
};
use api_shared::{
    ApiStatus, BookDetailsRes, BookRes, CreateBookReq, HealthRes, NoData, UploadPhotoForm,
};
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use bookcat_core::{BookService, CoreConfig};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub books: BookService,
}

impl AppState {
    pub fn new(books: BookService) -> Self {
        Self { books }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_books,
        handlers::create_book,
        handlers::delete_book,
        handlers::get_book,
        handlers::upload_photo,
    ),
    components(schemas(
        HealthRes,
        ApiStatus,
        NoData,
        CreateBookReq,
        BookRes,
        BookDetailsRes,
        UploadPhotoForm,
        BookEnvelope,
        BookListEnvelope,
        BookDetailsEnvelope,
        PhotoUrlEnvelope,
        EmptyEnvelope,
    ))
)]
pub struct ApiDoc;

/// Builds the full application router, photo file serving and Swagger UI included.
pub fn build_router(state: AppState, rest: &RestConfig) -> Router {
    let photos = state.books.photos();
    let photo_route = photos.url_prefix().to_string();
    let photo_files = ServeDir::new(photos.upload_dir());

    Router::new()
        .route("/health", get(handlers::health))
        .route("/book/listAll", get(handlers::list_books))
        .route("/book/new", post(handlers::create_book))
        .route("/book/delete/:id", delete(handlers::delete_book))
        .route("/book/uploadPhoto/:id", post(handlers::upload_photo))
        .route("/book/:id", get(handlers::get_book))
        .nest_service(&photo_route, photo_files)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(rest.max_upload_bytes))
        .layer(cors_layer(rest.cors_origin.clone()))
        .with_state(state)
}

fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()),
        None => CorsLayer::permissive(),
    }
}

/// Binds `rest.addr` and serves until the server fails.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails while running.
pub async fn serve(cfg: Arc<CoreConfig>, rest: RestConfig) -> anyhow::Result<()> {
    let state = AppState::new(BookService::from_config(&cfg));
    let app = build_router(state, &rest);

    tracing::info!(
        "++ Serving photos from {} at {}",
        cfg.photo_upload_dir().display(),
        cfg.photo_url_prefix()
    );

    let listener = tokio::net::TcpListener::bind(rest.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
