//! Uniform response envelope.
//!
//! Every endpoint, successful or not, answers with
//! `{"status": "success" | "error", "message": ..., "data": ... | null}`.

use crate::dto::{BookDetailsRes, BookRes};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Placeholder payload for responses whose `data` is always `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoData;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[aliases(
    BookEnvelope = ApiResponse<BookRes>,
    BookListEnvelope = ApiResponse<Vec<BookRes>>,
    BookDetailsEnvelope = ApiResponse<BookDetailsRes>,
    PhotoUrlEnvelope = ApiResponse<String>,
    EmptyEnvelope = ApiResponse<NoData>
)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<NoData> {
    /// A success with `data: null`.
    pub fn success_without_data(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            message: message.into(),
            data: None,
        }
    }
}
