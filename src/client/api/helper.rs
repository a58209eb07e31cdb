use crate::{
    client::model::error::ApiError,
    model::api::{ApiErrorResponse, ApiResponse},
};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Unwraps the success envelope, or maps the error envelope to an `ApiError`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        let envelope = response
            .json::<ApiResponse<T>>()
            .await
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))?;

        envelope
            .data
            .ok_or_else(|| ApiError::decode("Response did not contain any data"))
    } else {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(match serde_json::from_str::<ApiErrorResponse>(&text) {
            Ok(body) => ApiError::from_response(status, body),
            Err(_) => ApiError::from_status(status, text),
        })
    }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Send a request; any transport failure is reported as a network error
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| {
        dioxus_logger::tracing::warn!("Failed to send request: {}", e);
        ApiError::network()
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::decode(format!("Failed to serialize request: {}", e)))
}
