//! # Bookcat Core
//!
//! Core business logic for the book catalog.
//!
//! This crate contains pure data operations and file/folder management:
//! - Book creation with field validation and `B-nnn` identifier assignment
//! - Listing, lookup and deletion against a pluggable document store
//! - Cover photo uploads recorded on the book
//!
//! **No API concerns**: HTTP servers, response envelopes and status codes belong in `api-rest`
//! or `api-shared`.

pub mod book;
pub mod config;
pub mod constants;
pub mod error;
pub mod repositories;
pub mod service;
pub mod unique_id;
pub mod validation;

pub use book::{Book, Genre, NewBook, UnknownGenre, ValidatedBook};
pub use config::{CoreConfig, StoreKind};
pub use error::{BookError, BookResult, ConfigError, StoreError, ValidationError};
pub use repositories::{BookRepository, InMemoryBookRepository, JsonFileBookRepository};
pub use service::BookService;
pub use unique_id::UniqueIdGenerator;
pub use validation::validate_new_book;
