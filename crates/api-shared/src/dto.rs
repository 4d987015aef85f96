//! Request and response bodies.
//!
//! Field names are camelCase on the wire.

use bookcat_core::{Book, NewBook};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /book/new`.
///
/// Every field may be omitted; missing values are reported by validation rather than by the
/// JSON decoder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookReq {
    #[schema(example = "Dune")]
    pub title: Option<String>,
    #[schema(example = "Frank Herbert")]
    pub author: Option<String>,
    #[schema(example = "1965-08-01")]
    pub publication_date: Option<NaiveDate>,
    #[schema(example = "9780441013593")]
    pub isbn: Option<String>,
    /// One of Fiction, Non-Fiction, Mystery, Fantasy, Romance, Sci-Fi, Others.
    #[schema(example = "Sci-Fi")]
    pub genre: Option<String>,
    /// Omitted or `null` counts as 0, which fails the rating rule.
    #[serde(default)]
    #[schema(example = 5)]
    pub rating: Option<i64>,
}

impl From<CreateBookReq> for NewBook {
    fn from(req: CreateBookReq) -> Self {
        NewBook {
            title: req.title,
            author: req.author,
            publication_date: req.publication_date,
            isbn: req.isbn,
            genre: req.genre,
            rating: req.rating.unwrap_or_default(),
        }
    }
}

/// A stored book as returned by create and list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRes {
    pub id: String,
    #[schema(example = "B-001")]
    pub unique_id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub rating: u8,
    pub publication_date: NaiveDate,
    pub photo_url: Option<String>,
}

impl From<Book> for BookRes {
    fn from(book: Book) -> Self {
        BookRes {
            id: book.id.unwrap_or_default(),
            unique_id: book.unique_id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            genre: book.genre.to_string(),
            rating: book.rating,
            publication_date: book.publication_date,
            photo_url: book.photo_url,
        }
    }
}

/// The fields `GET /book/:id` exposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailsRes {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_date: NaiveDate,
    pub photo_url: Option<String>,
}

impl From<Book> for BookDetailsRes {
    fn from(book: Book) -> Self {
        BookDetailsRes {
            title: book.title,
            author: book.author,
            genre: book.genre.to_string(),
            publication_date: book.publication_date,
            photo_url: book.photo_url,
        }
    }
}

/// Multipart body of `POST /book/uploadPhoto/:id`. Documentation only; handlers read the
/// stream directly.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadPhotoForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookcat_core::Genre;
    use serde_json::json;

    fn dune() -> Book {
        Book {
            id: Some("0123456789abcdef0123456789abcdef".into()),
            unique_id: "B-001".into(),
            title: "Dune".into(),
            author: "Herbert".into(),
            isbn: "1234567890123".into(),
            genre: Genre::SciFi,
            rating: 5,
            publication_date: NaiveDate::from_ymd_opt(1965, 1, 1).unwrap(),
            photo_url: None,
        }
    }

    #[test]
    fn test_create_req_reads_camel_case_and_defaults_rating() {
        let req: CreateBookReq = serde_json::from_value(json!({
            "title": "Dune",
            "publicationDate": "1965-01-01",
            "genre": "Sci-Fi"
        }))
        .unwrap();

        let new_book = NewBook::from(req);
        assert_eq!(new_book.title.as_deref(), Some("Dune"));
        assert_eq!(new_book.author, None);
        assert_eq!(
            new_book.publication_date,
            NaiveDate::from_ymd_opt(1965, 1, 1)
        );
        assert_eq!(new_book.rating, 0);
    }

    #[test]
    fn test_create_req_null_rating_reaches_validation_as_zero() {
        let req: CreateBookReq = serde_json::from_value(json!({
            "title": "",
            "author": "Herbert",
            "publicationDate": "1965-01-01",
            "isbn": "1234567890123",
            "genre": "Sci-Fi",
            "rating": null
        }))
        .unwrap();

        assert_eq!(req.rating, None);
        assert_eq!(NewBook::from(req).rating, 0);
    }

    #[test]
    fn test_create_req_rejects_malformed_date() {
        let result: Result<CreateBookReq, _> =
            serde_json::from_value(json!({"publicationDate": "first of May"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_book_res_wire_shape() {
        let body = serde_json::to_value(BookRes::from(dune())).unwrap();

        assert_eq!(
            body,
            json!({
                "id": "0123456789abcdef0123456789abcdef",
                "uniqueId": "B-001",
                "title": "Dune",
                "author": "Herbert",
                "isbn": "1234567890123",
                "genre": "Sci-Fi",
                "rating": 5,
                "publicationDate": "1965-01-01",
                "photoUrl": null
            })
        );
    }

    #[test]
    fn test_book_details_res_exposes_subset() {
        let mut book = dune();
        book.photo_url = Some("/uploads/photos/x_cover.jpg".into());

        let body = serde_json::to_value(BookDetailsRes::from(book)).unwrap();

        assert_eq!(
            body,
            json!({
                "title": "Dune",
                "author": "Herbert",
                "genre": "Sci-Fi",
                "publicationDate": "1965-01-01",
                "photoUrl": "/uploads/photos/x_cover.jpg"
            })
        );
    }
}
