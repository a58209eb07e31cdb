use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiErrorResponse, ApiResponse},
        book::{BookDto, CreateBookDto, DeletedBookDto, UpdateBookDto},
    },
    server::{
        error::AppError,
        model::book::{CreateBookParams, UpdateBookParams},
        service::book::BookService,
        state::AppState,
        util::parse::parse_book_id,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// Create a new book.
///
/// Validates and trims the provided fields, then stores the book with a
/// server-assigned ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Book creation data (title, author, optional description)
///
/// # Returns
/// - `200 OK` - The created book
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/books",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 200, description = "Successfully created book", body = ApiResponse<BookDto>),
        (status = 400, description = "Invalid book data", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateBookParams::from_dto(payload)?;

    let service = BookService::new(&state.db);
    let book = service.create(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(book.into_dto(), "Book created successfully")),
    ))
}

/// Get all books.
///
/// # Returns
/// - `200 OK` - Every book ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved books", body = ApiResponse<Vec<BookDto>>),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
)]
pub async fn get_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let books: Vec<BookDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|book| book.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(books, "Books retrieved successfully")),
    ))
}

/// Get a specific book by ID.
///
/// # Returns
/// - `200 OK` - Book details
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No book with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = ApiResponse<BookDto>),
        (status = 400, description = "Invalid book ID", body = ApiErrorResponse),
        (status = 404, description = "Book not found", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
)]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let id = parse_book_id(id)?;

    let service = BookService::new(&state.db);
    let book = service.get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(book.into_dto(), "Book retrieved successfully")),
    ))
}

/// Update a book.
///
/// The body ID must match the route ID. Title, author and description are
/// replaced; the ID never changes.
///
/// # Returns
/// - `200 OK` - The book after the update
/// - `400 Bad Request` - Invalid ID, ID mismatch, malformed body or invalid fields
/// - `404 Not Found` - No book with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Successfully updated book", body = ApiResponse<BookDto>),
        (status = 400, description = "Invalid book data", body = ApiErrorResponse),
        (status = 404, description = "Book not found", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateBookDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let params = UpdateBookParams::from_dto(id, payload)?;

    let service = BookService::new(&state.db);
    let book = service.update(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(book.into_dto(), "Book updated successfully")),
    ))
}

/// Delete a book.
///
/// # Returns
/// - `200 OK` - ID of the deleted book
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No book with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted book", body = ApiResponse<DeletedBookDto>),
        (status = 400, description = "Invalid book ID", body = ApiErrorResponse),
        (status = 404, description = "Book not found", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let id = parse_book_id(id)?;

    let service = BookService::new(&state.db);
    let id = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            DeletedBookDto { id },
            "Book deleted successfully",
        )),
    ))
}
