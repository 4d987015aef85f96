use crate::error::{ApiError, ApiJson, PHOTO_FIELD};
use crate::AppState;
use api_shared::{
    ApiResponse, BookDetailsRes, BookRes, CreateBookReq, HealthRes, HealthService, NoData,
};
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

pub const NO_BOOKS_MESSAGE: &str = "There are no books";
pub const BOOKS_LISTED_MESSAGE: &str = "Books retrieved successfully";
pub const BOOK_DETAILS_MESSAGE: &str = "Book details retrieved successfully";
pub const PHOTO_UPLOADED_MESSAGE: &str = "Photo uploaded successfully";

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/book/listAll",
    responses(
        (status = 200, description = "Every book in the catalog", body = BookListEnvelope),
        (status = 500, description = "Store could not be read", body = EmptyEnvelope)
    )
)]
/// List all books
///
/// An empty catalog is still a success, with the message "There are no books".
#[axum::debug_handler]
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BookRes>>>, ApiError> {
    let books = state.books.list()?;

    let message = if books.is_empty() {
        NO_BOOKS_MESSAGE
    } else {
        BOOKS_LISTED_MESSAGE
    };

    Ok(Json(ApiResponse::success(
        message,
        books.into_iter().map(BookRes::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/book/new",
    request_body = CreateBookReq,
    responses(
        (status = 201, description = "Book created", body = BookEnvelope),
        (status = 400, description = "Validation failed or body is not valid JSON", body = EmptyEnvelope),
        (status = 500, description = "Book could not be saved", body = EmptyEnvelope)
    )
)]
/// Create a new book
///
/// Fields are validated in a fixed order and only the first failure is reported. On success the
/// book is given the next free `B-nnn` identifier.
#[axum::debug_handler]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateBookReq>,
) -> Result<(StatusCode, Json<ApiResponse<BookRes>>), ApiError> {
    let book = state.books.create(req.into())?;

    let message = format!("book created with title {}", book.title);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(message, BookRes::from(book))),
    ))
}

#[utoipa::path(
    delete,
    path = "/book/delete/{id}",
    params(("id" = String, Path, description = "Store id of the book")),
    responses(
        (status = 200, description = "Book deleted", body = EmptyEnvelope),
        (status = 404, description = "No book with this id", body = EmptyEnvelope),
        (status = 500, description = "Store refused the delete", body = EmptyEnvelope)
    )
)]
#[axum::debug_handler]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<NoData>>, ApiError> {
    state.books.delete_by_id(&id)?;

    Ok(Json(ApiResponse::success_without_data(format!(
        "book deleted with id {}",
        id
    ))))
}

#[utoipa::path(
    get,
    path = "/book/{id}",
    params(("id" = String, Path, description = "Store id of the book")),
    responses(
        (status = 200, description = "Book details", body = BookDetailsEnvelope),
        (status = 404, description = "No book with this id", body = EmptyEnvelope)
    )
)]
#[axum::debug_handler]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BookDetailsRes>>, ApiError> {
    let book = state.books.get_by_id(&id)?;

    Ok(Json(ApiResponse::success(
        BOOK_DETAILS_MESSAGE,
        BookDetailsRes::from(book),
    )))
}

#[utoipa::path(
    post,
    path = "/book/uploadPhoto/{id}",
    params(("id" = String, Path, description = "Store id of the book")),
    request_body(content = UploadPhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Photo stored; data is its URL", body = PhotoUrlEnvelope),
        (status = 400, description = "No file part, or body is not multipart", body = EmptyEnvelope),
        (status = 404, description = "No book with this id", body = EmptyEnvelope),
        (status = 413, description = "Upload exceeds the body limit", body = EmptyEnvelope),
        (status = 500, description = "Photo or record could not be written", body = EmptyEnvelope)
    )
)]
/// Upload a cover photo
///
/// Reads the `file` part of a multipart body, stores it under a unique name and points the
/// book's `photoUrl` at it. A previous photo URL is replaced.
#[axum::debug_handler]
pub async fn upload_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let mut multipart = multipart?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(PHOTO_FIELD) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            upload = Some((file_name, bytes));
            break;
        }
    }
    let (file_name, bytes) = upload.ok_or(ApiError::MissingFile)?;

    let url = state.books.upload_photo(&id, &bytes, &file_name)?;

    Ok(Json(ApiResponse::success(PHOTO_UPLOADED_MESSAGE, url)))
}
