//! Book records and creation input.
//!
//! [`Book`] is the persisted catalog entry. [`NewBook`] carries the caller-supplied fields of a
//! book that does not exist yet; every field is optional so that a missing value surfaces as the
//! matching validation error rather than a decoding failure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of genres a book may be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    Mystery,
    Fantasy,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Others,
}

impl Genre {
    pub const ALL: [Genre; 7] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Mystery,
        Genre::Fantasy,
        Genre::Romance,
        Genre::SciFi,
        Genre::Others,
    ];

    /// The label used on the wire and in stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::Mystery => "Mystery",
            Genre::Fantasy => "Fantasy",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Others => "Others",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label is not one of [`Genre::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre: {0}")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    /// Labels match exactly; `"sci-fi"` is not `"Sci-Fi"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// A catalog entry as held by the document store.
///
/// `id` is `None` only for a record that has not been saved yet; every book returned by a store
/// carries the id the store assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub id: Option<String>,
    pub unique_id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: Genre,
    pub rating: u8,
    pub publication_date: NaiveDate,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Book {
    /// Store-assigned id, or an empty string for an unsaved record.
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

/// Caller-supplied fields for a book that is about to be created.
///
/// `rating` defaults to `0`, which fails validation, so an omitted rating is reported as
/// [`crate::ValidationError::InvalidRating`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub rating: i64,
}

/// A [`NewBook`] whose fields have passed every creation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBook {
    pub title: String,
    pub author: String,
    pub publication_date: NaiveDate,
    pub isbn: String,
    pub genre: Genre,
    pub rating: u8,
}

impl ValidatedBook {
    /// Assembles an unsaved [`Book`] carrying `unique_id`.
    pub fn into_book(self, unique_id: String) -> Book {
        Book {
            id: None,
            unique_id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            genre: self.genre,
            rating: self.rating,
            publication_date: self.publication_date,
            photo_url: None,
        }
    }
}
