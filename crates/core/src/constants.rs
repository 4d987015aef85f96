//! Constants used throughout the book catalog core crate.
//!
//! Path, filename and environment-variable names live here so the binaries and the stores agree
//! on them.

/// Default directory for the JSON document store when no explicit directory is configured.
pub const DEFAULT_BOOK_DATA_DIR: &str = "book_data";

/// Directory name (under the data directory) holding the sharded book records.
pub const BOOKS_DIR_NAME: &str = "books";

/// Filename of a single persisted book record.
pub const BOOK_JSON_FILENAME: &str = "book.json";

/// Prefix of every human-readable book identifier.
pub const UNIQUE_ID_PREFIX: &str = "B-";

/// First counter value handed out by a fresh identifier generator.
pub const FIRST_UNIQUE_ID: u32 = 1;

/// Environment variable selecting the JSON store root.
pub const ENV_BOOK_DATA_DIR: &str = "BOOK_DATA_DIR";

/// Environment variable selecting the document store backend (`file` or `memory`).
pub const ENV_STORE_KIND: &str = "BOOKCAT_STORE";

/// Environment variable selecting the photo upload directory.
pub const ENV_PHOTO_UPLOAD_DIR: &str = "PHOTO_UPLOAD_DIR";

/// Environment variable selecting the public URL prefix for stored photos.
pub const ENV_PHOTO_URL_PREFIX: &str = "PHOTO_URL_PREFIX";
