//! Sharded JSON file document store.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//!   books/
//!     <s1>/
//!       <s2>/
//!         <id>/
//!           book.json
//! ```
//!
//! where `<id>` is the record's canonical 32-hex identifier and `s1`/`s2` are its first four hex
//! characters. The directory name is authoritative for the id: a `book.json` whose `id` field
//! disagrees with its directory is reported under the directory's id.
//!
//! Each write goes to its own uniquely named temporary file in the record directory and is
//! renamed into place, so a reader never sees a half-written record and overlapping saves to one
//! record do not share a temporary file. The last rename wins.

use super::{BookRepository, StoreResult};
use crate::book::Book;
use crate::constants::{BOOKS_DIR_NAME, BOOK_JSON_FILENAME};
use crate::error::StoreError;
use bookcat_uuid::ShardableUuid;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Document store keeping one JSON file per book.
#[derive(Debug, Clone)]
pub struct JsonFileBookRepository {
    books_dir: PathBuf,
}

impl JsonFileBookRepository {
    /// Creates a store rooted at `<data_dir>/books`.
    ///
    /// Nothing is created on disk until the first save.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            books_dir: data_dir.join(BOOKS_DIR_NAME),
        }
    }

    pub fn books_dir(&self) -> &Path {
        &self.books_dir
    }

    fn record_dir(&self, id: &ShardableUuid) -> PathBuf {
        id.sharded_dir(&self.books_dir)
    }

    fn read_record(&self, record_dir: &Path, id: &str) -> StoreResult<Book> {
        let path = record_dir.join(BOOK_JSON_FILENAME);
        let contents = fs::read_to_string(&path)?;
        let mut book: Book = serde_json::from_str(&contents)
            .map_err(|source| StoreError::Deserialization { path, source })?;
        book.id = Some(id.to_string());
        Ok(book)
    }

    /// Sorted subdirectories of `dir`; a missing `dir` has none.
    fn sorted_subdirs(dir: &Path) -> StoreResult<Vec<PathBuf>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut dirs: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        Ok(dirs)
    }
}

impl BookRepository for JsonFileBookRepository {
    /// Walks every shard in directory-name order.
    ///
    /// Records that cannot be read or parsed are logged and skipped so one damaged file does not
    /// hide the rest of the catalog.
    fn find_all(&self) -> StoreResult<Vec<Book>> {
        let mut books = Vec::new();

        for s1 in Self::sorted_subdirs(&self.books_dir)? {
            for s2 in Self::sorted_subdirs(&s1)? {
                for record_dir in Self::sorted_subdirs(&s2)? {
                    let Some(id) = record_dir
                        .file_name()
                        .and_then(|name| name.to_str())
                        .filter(|name| ShardableUuid::is_canonical(name))
                    else {
                        continue;
                    };

                    if !record_dir.join(BOOK_JSON_FILENAME).is_file() {
                        continue;
                    }

                    match self.read_record(&record_dir, id) {
                        Ok(book) => books.push(book),
                        Err(e) => {
                            tracing::warn!(
                                "skipping unreadable book record {}: {}",
                                record_dir.display(),
                                e
                            );
                        }
                    }
                }
            }
        }

        Ok(books)
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        let Ok(uuid) = ShardableUuid::parse(id) else {
            return Ok(None);
        };

        let record_dir = self.record_dir(&uuid);
        if !record_dir.join(BOOK_JSON_FILENAME).is_file() {
            return Ok(None);
        }

        self.read_record(&record_dir, id).map(Some)
    }

    fn save(&self, mut book: Book) -> StoreResult<Book> {
        let uuid = match book.id.as_deref() {
            Some(id) => ShardableUuid::parse(id)?,
            None => ShardableUuid::new(),
        };
        book.id = Some(uuid.to_string());

        let record_dir = self.record_dir(&uuid);
        fs::create_dir_all(&record_dir)?;

        let json = serde_json::to_string_pretty(&book).map_err(StoreError::Serialization)?;
        let mut tmp = NamedTempFile::new_in(&record_dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(record_dir.join(BOOK_JSON_FILENAME))
            .map_err(|e| StoreError::Io(e.error))?;

        Ok(book)
    }

    fn delete(&self, book: &Book) -> StoreResult<()> {
        let id = book.id.as_deref().ok_or(StoreError::MissingId)?;
        let uuid = ShardableUuid::parse(id)?;

        match fs::remove_dir_all(self.record_dir(&uuid)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists_by_unique_id(&self, unique_id: &str) -> StoreResult<bool> {
        Ok(self
            .find_all()?
            .iter()
            .any(|book| book.unique_id == unique_id))
    }
}
