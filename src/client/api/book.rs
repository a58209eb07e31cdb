use crate::{
    client::{
        api::helper::{delete, get, parse_response, post, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::book::{BookDto, CreateBookDto, DeletedBookDto, UpdateBookDto},
};

pub async fn get_books() -> Result<Vec<BookDto>, ApiError> {
    let response = send_request(get("/api/books")).await?;
    parse_response(response).await
}

pub async fn create_book(payload: CreateBookDto) -> Result<BookDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/books").body(body)).await?;
    parse_response(response).await
}

pub async fn update_book(payload: UpdateBookDto) -> Result<BookDto, ApiError> {
    let url = format!("/api/books/{}", payload.id);
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_book(id: i32) -> Result<DeletedBookDto, ApiError> {
    let url = format!("/api/books/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}
