use bookcat_files::FilesError;

/// A rule broken by a proposed book.
///
/// Only the first broken rule is ever reported; see [`crate::validation::validate_new_book`] for
/// the order in which rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required and must not exceed 100 characters.")]
    InvalidTitle,
    #[error("Author is required and must not exceed 50 characters.")]
    InvalidAuthor,
    #[error("Publication date is required.")]
    MissingDate,
    #[error("ISBN must be a 13-digit number.")]
    InvalidIsbn,
    #[error("Invalid genre selected.")]
    InvalidGenre,
    #[error("Rating must be between 1 and 5.")]
    InvalidRating,
}

/// Failures raised by a [`crate::repositories::BookRepository`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize book: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize book at {path}: {source}", path = path.display())]
    Deserialization {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("record has no id")]
    MissingId,
    #[error("invalid record id: {0}")]
    InvalidId(#[from] bookcat_uuid::UuidError),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Errors surfaced by [`crate::BookService`].
///
/// Every variant is terminal for the operation that produced it; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Book not found with ID: {0}")]
    NotFound(String),
    #[error("Couldn't save book, {0}")]
    Persistence(#[source] StoreError),
    #[error("Cannot delete book with id: {id} cause: {source}")]
    Deletion {
        id: String,
        #[source]
        source: StoreError,
    },
    #[error("File upload failed: {0}")]
    Upload(#[source] FilesError),
}

pub type BookResult<T> = std::result::Result<T, BookError>;

/// Startup configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown store kind '{0}' (expected 'file' or 'memory')")]
    InvalidStoreKind(String),
    #[error("photo URL prefix must be an absolute path other than '/', got '{0}'")]
    InvalidUrlPrefix(String),
    #[error("{name} cannot be empty")]
    EmptyPath { name: &'static str },
}
