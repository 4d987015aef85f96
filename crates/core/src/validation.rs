//! Creation-time validation of proposed books.
//!
//! Rules are checked in a fixed order and the first failure wins, so a request that breaks
//! several rules always reports the same error:
//!
//! 1. title: present, non-empty, at most [`MAX_TITLE_CHARS`] characters
//! 2. author: present, non-empty, at most [`MAX_AUTHOR_CHARS`] characters
//! 3. publication date: present
//! 4. isbn: present, exactly [`ISBN_DIGITS`] ASCII digits
//! 5. genre: present and one of [`Genre::ALL`]
//! 6. rating: between [`MIN_RATING`] and [`MAX_RATING`] inclusive
//!
//! Lengths are counted in characters, not bytes. Whitespace is not trimmed.

use crate::book::{Genre, NewBook, ValidatedBook};
use crate::error::ValidationError;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_AUTHOR_CHARS: usize = 50;
pub const ISBN_DIGITS: usize = 13;
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Checks `new_book` against every creation rule.
///
/// Pure: no I/O and no side effects.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule that fails.
pub fn validate_new_book(new_book: &NewBook) -> Result<ValidatedBook, ValidationError> {
    let title = bounded_text(new_book.title.as_deref(), MAX_TITLE_CHARS)
        .ok_or(ValidationError::InvalidTitle)?;

    let author = bounded_text(new_book.author.as_deref(), MAX_AUTHOR_CHARS)
        .ok_or(ValidationError::InvalidAuthor)?;

    let publication_date = new_book
        .publication_date
        .ok_or(ValidationError::MissingDate)?;

    let isbn = new_book
        .isbn
        .as_deref()
        .filter(|isbn| is_isbn(isbn))
        .ok_or(ValidationError::InvalidIsbn)?;

    let genre = new_book
        .genre
        .as_deref()
        .and_then(|genre| genre.parse::<Genre>().ok())
        .ok_or(ValidationError::InvalidGenre)?;

    let rating = rating(new_book.rating).ok_or(ValidationError::InvalidRating)?;

    Ok(ValidatedBook {
        title: title.to_string(),
        author: author.to_string(),
        publication_date,
        isbn: isbn.to_string(),
        genre,
        rating,
    })
}

/// Length is the number of Unicode scalar values. A character outside the Basic Multilingual
/// Plane (most emoji) counts once, not as a UTF-16 surrogate pair.
fn bounded_text(value: Option<&str>, max_chars: usize) -> Option<&str> {
    value.filter(|v| !v.is_empty() && v.chars().count() <= max_chars)
}

fn is_isbn(value: &str) -> bool {
    value.len() == ISBN_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

fn rating(value: i64) -> Option<u8> {
    if (MIN_RATING..=MAX_RATING).contains(&value) {
        u8::try_from(value).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dune() -> NewBook {
        NewBook {
            title: Some("Dune".into()),
            author: Some("Herbert".into()),
            publication_date: NaiveDate::from_ymd_opt(1965, 1, 1),
            isbn: Some("1234567890123".into()),
            genre: Some("Sci-Fi".into()),
            rating: 5,
        }
    }

    #[test]
    fn test_valid_book_passes() {
        let validated = validate_new_book(&dune()).unwrap();

        assert_eq!(validated.title, "Dune");
        assert_eq!(validated.genre, Genre::SciFi);
        assert_eq!(validated.rating, 5);
    }

    #[test]
    fn test_title_rules() {
        for title in [None, Some(String::new()), Some("x".repeat(101))] {
            let book = NewBook { title, ..dune() };
            assert_eq!(validate_new_book(&book), Err(ValidationError::InvalidTitle));
        }

        let book = NewBook {
            title: Some("x".repeat(100)),
            ..dune()
        };
        assert!(validate_new_book(&book).is_ok());
    }

    #[test]
    fn test_title_length_counts_characters() {
        let book = NewBook {
            title: Some("é".repeat(100)),
            ..dune()
        };
        assert!(validate_new_book(&book).is_ok());

        let book = NewBook {
            title: Some("\u{1F4DA}".repeat(100)),
            ..dune()
        };
        assert!(validate_new_book(&book).is_ok());

        let book = NewBook {
            author: Some("\u{1F4DA}".repeat(51)),
            ..dune()
        };
        assert_eq!(validate_new_book(&book), Err(ValidationError::InvalidAuthor));
    }

    #[test]
    fn test_whitespace_title_is_not_empty() {
        let book = NewBook {
            title: Some(" ".into()),
            ..dune()
        };
        assert!(validate_new_book(&book).is_ok());
    }

    #[test]
    fn test_author_rules() {
        for author in [None, Some(String::new()), Some("a".repeat(51))] {
            let book = NewBook { author, ..dune() };
            assert_eq!(validate_new_book(&book), Err(ValidationError::InvalidAuthor));
        }

        let book = NewBook {
            author: Some("a".repeat(50)),
            ..dune()
        };
        assert!(validate_new_book(&book).is_ok());
    }

    #[test]
    fn test_missing_date() {
        let book = NewBook {
            publication_date: None,
            ..dune()
        };
        assert_eq!(validate_new_book(&book), Err(ValidationError::MissingDate));
    }

    #[test]
    fn test_isbn_rules() {
        for isbn in [
            None,
            Some("12345".to_string()),
            Some("12345678901234".to_string()),
            Some("123456789012X".to_string()),
            Some("-123456789012".to_string()),
            Some("١٢٣٤٥٦٧٨٩٠١٢٣".to_string()),
        ] {
            let book = NewBook { isbn, ..dune() };
            assert_eq!(validate_new_book(&book), Err(ValidationError::InvalidIsbn));
        }
    }

    #[test]
    fn test_genre_rules() {
        for genre in [None, Some("Poetry".to_string()), Some("fiction".to_string())] {
            let book = NewBook { genre, ..dune() };
            assert_eq!(validate_new_book(&book), Err(ValidationError::InvalidGenre));
        }

        for genre in Genre::ALL {
            let book = NewBook {
                genre: Some(genre.as_str().to_string()),
                ..dune()
            };
            assert_eq!(validate_new_book(&book).unwrap().genre, genre);
        }
    }

    #[test]
    fn test_rating_rules() {
        for rating in [0, 6, -1, i64::MAX] {
            let book = NewBook { rating, ..dune() };
            assert_eq!(validate_new_book(&book), Err(ValidationError::InvalidRating));
        }

        for rating in 1..=5 {
            let book = NewBook { rating, ..dune() };
            assert_eq!(validate_new_book(&book).unwrap().rating as i64, rating);
        }
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let everything_wrong = NewBook::default();
        assert_eq!(
            validate_new_book(&everything_wrong),
            Err(ValidationError::InvalidTitle)
        );

        let book = NewBook {
            author: None,
            isbn: Some("12345".into()),
            rating: 9,
            ..dune()
        };
        assert_eq!(validate_new_book(&book), Err(ValidationError::InvalidAuthor));

        let book = NewBook {
            publication_date: None,
            genre: Some("Poetry".into()),
            ..dune()
        };
        assert_eq!(validate_new_book(&book), Err(ValidationError::MissingDate));

        let book = NewBook {
            isbn: Some("12345".into()),
            rating: 6,
            ..dune()
        };
        assert_eq!(validate_new_book(&book), Err(ValidationError::InvalidIsbn));

        let book = NewBook {
            genre: None,
            rating: 0,
            ..dune()
        };
        assert_eq!(validate_new_book(&book), Err(ValidationError::InvalidGenre));
    }
}
