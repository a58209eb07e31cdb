//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every error response carries an `ApiErrorResponse` body. The same value is also
//! stored as a response extension so `middleware::error::attach_trace_id` can stamp
//! the request's trace identifier onto it.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ApiErrorResponse,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Message returned to clients for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Message attached to validation failures carrying a field list.
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation errors occurred.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure variants use `#[from]` for
/// automatic conversion and always map to 500; domain variants classify the failure
/// for the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication flow error.
    ///
    /// Status code is chosen by `AuthError::status_code()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Client input was malformed.
    ///
    /// Results in 400 Bad Request. `errors` holds one message per failing field.
    #[error("{message}: {}", errors.join(", "))]
    Validation {
        /// Summary message for the failure
        message: String,
        /// Field-level messages
        errors: Vec<String>,
    },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// The requested operation could not be carried out, e.g. a write that
    /// affected no rows.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    InvalidOperation(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds a validation failure with the standard summary message.
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation {
            message: VALIDATION_ERROR_MESSAGE.to_string(),
            errors,
        }
    }
}

/// Malformed or mistyped JSON bodies are validation failures.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            message: "Invalid request body".to_string(),
            errors: vec![rejection.body_text()],
        }
    }
}

/// Non-numeric path identifiers are validation failures.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameters: {}", rejection.body_text());

        Self::Validation {
            message: "Invalid book ID".to_string(),
            errors: vec!["Book ID must be a positive integer".to_string()],
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and an
/// `ApiErrorResponse` body. Internal errors are logged with full details but return
/// a generic message to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `InvalidOperation` variants
/// - 404 Not Found - For `NotFound` variant
/// - Variable - For `AuthErr`, chosen by `AuthError::status_code()`
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse::new(message, Some(errors).filter(|e| !e.is_empty())),
            ),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorResponse::new(msg, None)),
            Self::InvalidOperation(msg) => {
                (StatusCode::BAD_REQUEST, ApiErrorResponse::new(msg, None))
            }
            Self::AuthErr(err) => {
                let status = err.status_code();
                if status.is_server_error() {
                    tracing::error!("Authentication error: {}", err);
                }
                (status, ApiErrorResponse::new(err.client_message(), None))
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorResponse::new(INTERNAL_ERROR_MESSAGE, None),
                )
            }
        };

        error_response(status, body)
    }
}

/// Builds a JSON error response and records the body as a response extension.
pub(crate) fn error_response(status: StatusCode, body: ApiErrorResponse) -> Response {
    let mut response = (status, Json(body.clone())).into_response();
    response.extensions_mut().insert(body);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(response: &Response) -> ApiErrorResponse {
        response
            .extensions()
            .get::<ApiErrorResponse>()
            .cloned()
            .expect("error body extension")
    }

    #[test]
    fn validation_maps_to_bad_request_with_field_list() {
        let response =
            AppError::validation(vec!["Title is required".to_string()]).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(&response);
        assert!(!body.success);
        assert_eq!(body.message, VALIDATION_ERROR_MESSAGE);
        assert_eq!(body.errors, Some(vec!["Title is required".to_string()]));
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("Book with ID 7 was not found".to_string())
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(&response).message, "Book with ID 7 was not found");
    }

    #[test]
    fn invalid_operation_maps_to_bad_request() {
        let response = AppError::InvalidOperation("Failed to update book".to_string())
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(&response).errors, None);
    }

    /// Internal details never reach the client.
    #[test]
    fn unclassified_errors_map_to_generic_500() {
        let response = AppError::DbErr(sea_orm::DbErr::Custom("disk I/O error".to_string()))
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(&response);
        assert_eq!(body.message, INTERNAL_ERROR_MESSAGE);
        assert_eq!(body.errors, None);
    }

    #[test]
    fn auth_errors_use_their_own_status() {
        let response = AppError::AuthErr(AuthError::CsrfValidationFailed).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
