//! # API Shared
//!
//! Shared definitions for the book catalog APIs.
//!
//! Contains:
//! - The response envelope every endpoint answers with (`envelope` module)
//! - Request and response bodies with OpenAPI schemas (`dto` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `bookcat` CLI.

pub mod dto;
pub mod envelope;
pub mod health;

pub use dto::{BookDetailsRes, BookRes, CreateBookReq, UploadPhotoForm};
pub use envelope::{ApiResponse, ApiStatus, NoData};
pub use health::{HealthRes, HealthService};
