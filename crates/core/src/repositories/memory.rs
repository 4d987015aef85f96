//! In-process document store.

use super::{BookRepository, StoreResult};
use crate::book::Book;
use crate::error::StoreError;
use bookcat_uuid::ShardableUuid;
use std::sync::{Mutex, MutexGuard};

/// Books held in insertion order behind a mutex.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Mutex<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn books(&self) -> StoreResult<MutexGuard<'_, Vec<Book>>> {
        self.books.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl BookRepository for InMemoryBookRepository {
    fn find_all(&self) -> StoreResult<Vec<Book>> {
        Ok(self.books()?.clone())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        Ok(self
            .books()?
            .iter()
            .find(|book| book.id.as_deref() == Some(id))
            .cloned())
    }

    fn save(&self, mut book: Book) -> StoreResult<Book> {
        let mut books = self.books()?;

        let id = match &book.id {
            Some(id) => id.clone(),
            None => {
                let id = ShardableUuid::new().to_string();
                book.id = Some(id.clone());
                id
            }
        };

        match books.iter_mut().find(|b| b.id.as_deref() == Some(&id)) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }

        Ok(book)
    }

    fn delete(&self, book: &Book) -> StoreResult<()> {
        let id = book.id.as_deref().ok_or(StoreError::MissingId)?;
        self.books()?.retain(|b| b.id.as_deref() != Some(id));
        Ok(())
    }

    fn exists_by_unique_id(&self, unique_id: &str) -> StoreResult<bool> {
        Ok(self.books()?.iter().any(|b| b.unique_id == unique_id))
    }
}
