//! Upload-directory photo storage
//!
//! [`PhotoStore`] owns a single upload directory. Each call to [`PhotoStore::store`]:
//!
//! 1. creates the upload directory if it is missing,
//! 2. derives a file name of the form `<token>_<original filename>` where `<token>` is a fresh
//!    random identifier,
//! 3. writes the whole buffer to that path (refusing to replace an existing file), and
//! 4. returns the public reference `<url_prefix>/<file name>` together with a little metadata.
//!
//! Only the final component of the caller-supplied filename is used, so a name such as
//! `../../etc/passwd` is stored as `<token>_passwd` inside the upload directory.

use crate::constants::FALLBACK_FILENAME;
use crate::FilesError;
use bookcat_uuid::ShardableUuid;
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Metadata for a stored photo
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct StoredPhoto {
    /// Generated file name inside the upload directory
    pub file_name: String,

    /// Public reference recorded on the book (`<url_prefix>/<file_name>`)
    pub url: String,

    /// Size of the written file in bytes
    pub size_bytes: u64,

    /// Detected media type (MIME type), if available
    ///
    /// Best-effort only; uploads are not rejected on the basis of this value.
    pub media_type: Option<String>,

    /// UTC timestamp when the photo was written
    pub stored_at: DateTime<Utc>,
}

/// Filesystem-backed store for uploaded photos
#[derive(Debug, Clone)]
pub struct PhotoStore {
    upload_dir: PathBuf,
    url_prefix: String,
}

impl PhotoStore {
    /// Creates a store rooted at `upload_dir`.
    ///
    /// No I/O happens here; the directory is created lazily on the first upload.
    /// Trailing slashes on `url_prefix` are dropped.
    pub fn new(upload_dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        let url_prefix = url_prefix.into().trim_end_matches('/').to_string();
        Self {
            upload_dir: upload_dir.into(),
            url_prefix,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Writes `bytes` under a newly generated name derived from `original_filename`.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if:
    /// - `original_filename` contains control characters ([`FilesError::InvalidFilename`])
    /// - the upload directory cannot be created (I/O)
    /// - the file cannot be created or written (I/O)
    pub fn store(&self, bytes: &[u8], original_filename: &str) -> Result<StoredPhoto, FilesError> {
        let file_name = Self::unique_file_name(original_filename)?;

        self.ensure_upload_dir()?;

        let path = self.upload_dir.join(&file_name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                FilesError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create {}: {}", path.display(), e),
                ))
            })?;

        file.write_all(bytes).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write {}: {}", path.display(), e),
            ))
        })?;

        let media_type = infer::get(bytes).map(|kind| kind.mime_type().to_string());

        tracing::debug!(
            "stored photo {} ({} bytes, {:?})",
            path.display(),
            bytes.len(),
            media_type
        );

        Ok(StoredPhoto {
            url: self.url_for(&file_name),
            file_name,
            size_bytes: bytes.len() as u64,
            media_type,
            stored_at: Utc::now(),
        })
    }

    /// Public reference for a stored file name.
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.url_prefix, file_name)
    }

    /// Builds `<token>_<name>` where `<name>` is the final component of `original_filename`.
    ///
    /// Both `/` and `\` count as separators. A name that is empty after stripping (or is `.`
    /// or `..`) becomes [`FALLBACK_FILENAME`].
    pub fn unique_file_name(original_filename: &str) -> Result<String, FilesError> {
        if original_filename.chars().any(char::is_control) {
            return Err(FilesError::InvalidFilename(format!(
                "filename contains control characters: {:?}",
                original_filename
            )));
        }

        let base = original_filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();
        let base = match base {
            "" | "." | ".." => FALLBACK_FILENAME,
            other => other,
        };

        Ok(format!("{}_{}", ShardableUuid::new(), base))
    }

    fn ensure_upload_dir(&self) -> Result<(), FilesError> {
        if self.upload_dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(&self.upload_dir).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create upload directory {}: {}",
                    self.upload_dir.display(),
                    e
                ),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> PhotoStore {
        PhotoStore::new(temp.path().join("uploads").join("photos"), "/uploads/photos")
    }

    #[test]
    fn test_store_creates_missing_upload_dir() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert!(!store.upload_dir().exists());

        store.store(b"cover", "cover.jpg").unwrap();

        assert!(store.upload_dir().is_dir());
    }

    #[test]
    fn test_store_writes_bytes_and_returns_reference() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let photo = store.store(b"Hello, World!", "cover.jpg").unwrap();

        assert!(photo.file_name.ends_with("_cover.jpg"));
        assert_eq!(photo.url, format!("/uploads/photos/{}", photo.file_name));
        assert_eq!(photo.size_bytes, 13);

        let written = fs::read(store.upload_dir().join(&photo.file_name)).unwrap();
        assert_eq!(written, b"Hello, World!");
    }

    #[test]
    fn test_same_original_name_gives_distinct_files() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let first = store.store(b"one", "cover.jpg").unwrap();
        let second = store.store(b"two", "cover.jpg").unwrap();

        assert_ne!(first.file_name, second.file_name);
        assert_eq!(
            fs::read(store.upload_dir().join(&first.file_name)).unwrap(),
            b"one"
        );
        assert_eq!(
            fs::read(store.upload_dir().join(&second.file_name)).unwrap(),
            b"two"
        );
    }

    #[test]
    fn test_token_prefix_is_canonical_id() {
        let name = PhotoStore::unique_file_name("cover.jpg").unwrap();
        let (token, rest) = name.split_once('_').unwrap();

        assert!(ShardableUuid::is_canonical(token));
        assert_eq!(rest, "cover.jpg");
    }

    #[test]
    fn test_directory_components_are_stripped() {
        let name = PhotoStore::unique_file_name("../../etc/passwd").unwrap();
        assert!(name.ends_with("_passwd"));
        assert!(!name.contains('/'));

        let name = PhotoStore::unique_file_name("C:\\Users\\me\\cover.png").unwrap();
        assert!(name.ends_with("_cover.png"));
        assert!(!name.contains('\\'));
    }

    #[test]
    fn test_empty_and_dot_names_fall_back() {
        for original in ["", "   ", ".", "..", "photos/"] {
            let name = PhotoStore::unique_file_name(original).unwrap();
            assert!(
                name.ends_with(&format!("_{}", FALLBACK_FILENAME)),
                "unexpected name for {:?}: {}",
                original,
                name
            );
        }
    }

    #[test]
    fn test_control_characters_rejected() {
        let result = PhotoStore::unique_file_name("cover\0.jpg");
        assert!(matches!(result, Err(FilesError::InvalidFilename(_))));
    }

    #[test]
    fn test_media_type_detected_for_png() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

        let photo = store.store(&png_header, "cover.png").unwrap();

        assert_eq!(photo.media_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_media_type_absent_for_plain_bytes() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let photo = store.store(b"plain text", "notes.txt").unwrap();

        assert_eq!(photo.media_type, None);
    }

    #[test]
    fn test_upload_dir_blocked_by_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let blocked = temp.path().join("uploads");
        fs::write(&blocked, "not a directory").unwrap();
        let store = PhotoStore::new(blocked.join("photos"), "/uploads/photos");

        let result = store.store(b"cover", "cover.jpg");

        assert!(matches!(result, Err(FilesError::Io(_))));
    }

    #[test]
    fn test_url_prefix_trailing_slash_dropped() {
        let store = PhotoStore::new("uploads", "/static/covers/");
        assert_eq!(store.url_prefix(), "/static/covers");
        assert_eq!(store.url_for("a.jpg"), "/static/covers/a.jpg");
    }

    #[test]
    fn test_stored_photo_serialises() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let photo = store.store(b"x", "x.jpg").unwrap();

        let json = serde_json::to_string(&photo).unwrap();
        assert!(json.contains(&photo.file_name));
        assert!(json.contains("\"size_bytes\":1"));
    }
}
