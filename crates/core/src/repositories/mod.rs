//! Document store implementations.
//!
//! The service layer only sees the [`BookRepository`] trait. Two stores are provided:
//!
//! - [`memory::InMemoryBookRepository`] keeps records in process memory (tests, demos)
//! - [`json_file::JsonFileBookRepository`] keeps one JSON file per record in a sharded directory
//!   tree under the configured data directory

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileBookRepository;
pub use memory::InMemoryBookRepository;

use crate::book::Book;
use crate::error::StoreError;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence operations the book service depends on.
///
/// Ids are opaque to callers. A store treats an id it could never have issued as simply absent.
pub trait BookRepository: Send + Sync {
    /// Every stored book, in the store's own order.
    fn find_all(&self) -> StoreResult<Vec<Book>>;

    /// The book stored under `id`, if any.
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Book>>;

    /// Inserts `book` when it has no id (assigning one), otherwise replaces the stored record
    /// with the same id. Returns the record as stored.
    fn save(&self, book: Book) -> StoreResult<Book>;

    /// Removes the record with `book`'s id. Removing an absent record is not an error.
    fn delete(&self, book: &Book) -> StoreResult<()>;

    /// Whether any stored book carries `unique_id`.
    fn exists_by_unique_id(&self, unique_id: &str) -> StoreResult<bool>;
}
