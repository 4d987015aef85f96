//! Store identifiers and sharded-path utilities.
//!
//! Book records are keyed by an opaque identifier assigned by the document store. Every store in
//! this workspace uses the same *canonical* form for that identifier: **32 lowercase hexadecimal
//! characters** (a v4 UUID without hyphens).
//!
//! This crate provides:
//! - [`ShardableUuid`], a wrapper that guarantees the canonical format once constructed.
//! - The sharding rule used by the JSON file store to place records on disk.
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! ## Sharded directory layout
//! For a canonical id `u`, records live under:
//! `parent_dir/<u[0..2]>/<u[2..4]>/<u>/`
//!
//! Example:
//! `book_data/books/55/0e/550e8400e29b41d4a716446655440000/`
//!
//! Sharding keeps any single directory from growing without bound as the catalog grows.

mod service;

pub use service::{ShardableUuid, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
