//! Book catalog photo storage
//!
//! This crate stores uploaded book photos on the local filesystem.
//!
//! ## Design Principles
//!
//! - Book records hold only a *reference* to a photo (a relative URL), never the bytes
//! - Uploaded files are never overwritten: every upload gets a fresh, collision-resistant name
//! - The upload directory and the public URL prefix are configuration, not code
//!
//! ## Storage Model
//!
//! ```text
//! <upload_dir>/
//! ├── 6f1c…e2_cover.jpg
//! └── 9a0b…41_cover.jpg      # same original name, different token
//! ```
//!
//! The matching reference stored on the book is `<url_prefix>/<generated file name>`,
//! e.g. `/uploads/photos/6f1c…e2_cover.jpg`.
//!
//! ## Example Usage
//!
//! ```no_run
//! use bookcat_files::PhotoStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PhotoStore::new("uploads/photos", "/uploads/photos");
//! let photo = store.store(b"\x89PNG\r\n\x1a\n", "cover.png")?;
//! println!("stored at {}", photo.url);
//! # Ok(())
//! # }
//! ```

mod constants;
mod photos;

pub use constants::{DEFAULT_PHOTO_URL_PREFIX, DEFAULT_UPLOAD_DIR, FALLBACK_FILENAME};
pub use photos::{PhotoStore, StoredPhoto};

/// Errors that can occur during photo storage
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// The supplied original filename cannot be used as part of a stored file name
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
