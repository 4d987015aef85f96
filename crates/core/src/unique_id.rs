//! Human-readable book identifiers (`B-001`, `B-002`, ...).
//!
//! The generator owns a counter that starts at [`FIRST_UNIQUE_ID`] and only moves forward.
//! The counter is not derived from stored data: after a restart it begins at `B-001` again, and
//! the store existence check is what skips identifiers that are already taken.
//!
//! Taking a counter value is atomic, but checking the candidate and later saving the book are two
//! separate store calls. Two creations running at the same time can both see a candidate as free
//! if it was handed out by an earlier generator instance, so uniqueness under concurrent writers
//! is left to the store.

use crate::constants::{FIRST_UNIQUE_ID, UNIQUE_ID_PREFIX};
use crate::repositories::{BookRepository, StoreResult};
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug)]
pub struct UniqueIdGenerator {
    next: AtomicU32,
}

impl Default for UniqueIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UniqueIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(FIRST_UNIQUE_ID)
    }

    pub fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }

    /// Renders counter value `n` as `B-` followed by at least three digits.
    pub fn format(n: u32) -> String {
        format!("{}{:03}", UNIQUE_ID_PREFIX, n)
    }

    /// The counter value the next candidate will use.
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::SeqCst)
    }

    /// Returns the first candidate that `repository` does not already hold.
    ///
    /// Every candidate examined, taken or not, consumes a counter value.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the store's existence check.
    pub fn next_unique_id<R>(&self, repository: &R) -> StoreResult<String>
    where
        R: BookRepository + ?Sized,
    {
        loop {
            let candidate = Self::format(self.next.fetch_add(1, Ordering::SeqCst));
            if !repository.exists_by_unique_id(&candidate)? {
                return Ok(candidate);
            }
            tracing::debug!("unique id {} already taken, advancing", candidate);
        }
    }
}
