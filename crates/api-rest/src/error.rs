//! Error to HTTP response mapping.

use api_shared::ApiResponse;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookcat_core::BookError;

/// Multipart field carrying the uploaded photo.
pub const PHOTO_FIELD: &str = "file";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Book(#[from] BookError),
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),
    #[error(transparent)]
    Multipart(#[from] MultipartError),
    #[error("Required part 'file' is not present.")]
    MissingFile,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Book(BookError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Book(BookError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Book(
                BookError::Persistence(_) | BookError::Deletion { .. } | BookError::Upload(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Json(_) | ApiError::MultipartRejection(_) | ApiError::MissingFile => {
                StatusCode::BAD_REQUEST
            }
            // Keeps 413 when the body limit is hit.
            ApiError::Multipart(e) => e.status(),
        }
    }

    /// Server-side failures are logged as errors; client mistakes only at debug.
    pub fn log_level(&self) -> tracing::Level {
        if self.status().is_server_error() {
            tracing::Level::ERROR
        } else {
            tracing::Level::DEBUG
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Json(rejection) => rejection.body_text(),
            ApiError::MultipartRejection(rejection) => rejection.body_text(),
            ApiError::Multipart(e) => e.body_text(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.log_level() == tracing::Level::ERROR {
            tracing::error!("request failed with {}: {:?}", status, self);
        } else {
            tracing::debug!("request rejected with {}: {}", status, self);
        }

        (status, Json(ApiResponse::error(self.message()))).into_response()
    }
}

/// JSON body extractor whose rejections use the response envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
