//! Book catalog operations.
//!
//! [`BookService`] ties together validation, identifier assignment, the document store and the
//! photo store. It holds no request state; clones share the same store, photo directory and
//! identifier counter.
//!
//! ## Pure Data Operations
//!
//! This module contains **only** data operations. HTTP routing, response envelopes and status
//! codes belong in `api-rest` and `api-shared`.

use crate::book::{Book, NewBook};
use crate::config::{CoreConfig, StoreKind};
use crate::error::{BookError, BookResult};
use crate::repositories::{BookRepository, InMemoryBookRepository, JsonFileBookRepository};
use crate::unique_id::UniqueIdGenerator;
use crate::validation::validate_new_book;
use bookcat_files::PhotoStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct BookService {
    repository: Arc<dyn BookRepository>,
    photos: PhotoStore,
    unique_ids: Arc<UniqueIdGenerator>,
}

impl std::fmt::Debug for BookService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookService")
            .field("photos", &self.photos)
            .field("unique_ids", &self.unique_ids)
            .finish_non_exhaustive()
    }
}

impl BookService {
    /// Creates a service with a fresh identifier counter.
    pub fn new(repository: Arc<dyn BookRepository>, photos: PhotoStore) -> Self {
        Self::with_unique_ids(repository, photos, Arc::new(UniqueIdGenerator::new()))
    }

    /// Creates a service sharing an existing identifier counter.
    pub fn with_unique_ids(
        repository: Arc<dyn BookRepository>,
        photos: PhotoStore,
        unique_ids: Arc<UniqueIdGenerator>,
    ) -> Self {
        Self {
            repository,
            photos,
            unique_ids,
        }
    }

    /// Builds the store and photo directory described by `cfg`.
    pub fn from_config(cfg: &CoreConfig) -> Self {
        let repository: Arc<dyn BookRepository> = match cfg.store_kind() {
            StoreKind::File => Arc::new(JsonFileBookRepository::new(cfg.book_data_dir())),
            StoreKind::Memory => Arc::new(InMemoryBookRepository::new()),
        };
        let photos = PhotoStore::new(cfg.photo_upload_dir(), cfg.photo_url_prefix());

        Self::new(repository, photos)
    }

    pub fn photos(&self) -> &PhotoStore {
        &self.photos
    }

    /// Validates `new_book`, assigns it a `B-nnn` identifier and persists it.
    ///
    /// Validation completes before anything touches the store, so an invalid book is never
    /// partially written.
    ///
    /// # Errors
    ///
    /// - [`BookError::Validation`] for the first creation rule the input breaks
    /// - [`BookError::Persistence`] if the identifier check or the save fails; the candidate
    ///   identifier is discarded
    pub fn create(&self, new_book: NewBook) -> BookResult<Book> {
        let validated = validate_new_book(&new_book)?;

        let unique_id = self
            .unique_ids
            .next_unique_id(self.repository.as_ref())
            .map_err(BookError::Persistence)?;

        let book = self
            .repository
            .save(validated.into_book(unique_id))
            .map_err(BookError::Persistence)?;

        tracing::info!(
            "created book {} ({}) with title {:?}",
            book.unique_id,
            book.id_str(),
            book.title
        );

        Ok(book)
    }

    /// Every book, in the store's order. An empty catalog is not an error.
    pub fn list(&self) -> BookResult<Vec<Book>> {
        self.repository.find_all().map_err(BookError::Persistence)
    }

    /// # Errors
    ///
    /// [`BookError::NotFound`] when no book has `id`; [`BookError::Persistence`] if the lookup
    /// itself fails.
    pub fn get_by_id(&self, id: &str) -> BookResult<Book> {
        self.repository
            .find_by_id(id)
            .map_err(BookError::Persistence)?
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    /// # Errors
    ///
    /// [`BookError::NotFound`] when no book has `id`; [`BookError::Deletion`] if the store
    /// refuses the delete.
    pub fn delete_by_id(&self, id: &str) -> BookResult<()> {
        let book = self.get_by_id(id)?;

        self.repository
            .delete(&book)
            .map_err(|source| BookError::Deletion {
                id: id.to_string(),
                source,
            })?;

        tracing::info!("deleted book {} ({})", book.unique_id, id);
        Ok(())
    }

    /// Stores `bytes` as the book's photo and points `photo_url` at it.
    ///
    /// Any previous `photo_url` is replaced; the old file is left in place. Returns the new
    /// relative URL.
    ///
    /// # Errors
    ///
    /// - [`BookError::NotFound`] when no book has `id`; nothing is written in that case
    /// - [`BookError::Upload`] if the upload directory or file cannot be written
    /// - [`BookError::Persistence`] if the updated record cannot be saved
    pub fn upload_photo(
        &self,
        id: &str,
        bytes: &[u8],
        original_filename: &str,
    ) -> BookResult<String> {
        let mut book = self.get_by_id(id)?;

        let photo = self
            .photos
            .store(bytes, original_filename)
            .map_err(BookError::Upload)?;

        book.photo_url = Some(photo.url.clone());
        self.repository.save(book).map_err(BookError::Persistence)?;

        tracing::info!(
            "attached photo {} ({} bytes, {}) to book {}",
            photo.file_name,
            photo.size_bytes,
            photo.media_type.as_deref().unwrap_or("unknown type"),
            id
        );

        Ok(photo.url)
    }
}
