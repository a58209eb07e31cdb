//! Error interception for API responses.
//!
//! Every failure is classified by `AppError::into_response`; this middleware is the
//! single point where the classified response is finished off. It copies the request's
//! trace identifier into the error envelope and logs the failure against it so client
//! reports can be correlated with server logs.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::model::api::ApiErrorResponse;

/// Header carrying the per-request trace identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attaches the request's trace identifier to error envelopes.
///
/// Responses that were not produced by `AppError` pass through untouched.
///
/// # Arguments
/// - `request` - Incoming request, expected to carry an `x-request-id` header
/// - `next` - Remaining middleware stack and handler
///
/// # Returns
/// The handler's response, with `trace_id` filled in on error envelopes
pub async fn attach_trace_id(request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    let Some(mut body) = response.extensions_mut().remove::<ApiErrorResponse>() else {
        return response;
    };

    let status = response.status();
    let trace = trace_id.as_deref().unwrap_or("-");
    if status.is_server_error() {
        tracing::error!(trace_id = trace, "{} {} failed with {}", method, path, status);
    } else {
        tracing::warn!(
            trace_id = trace,
            "{} {} rejected with {}: {}",
            method,
            path,
            status,
            body.message
        );
    }

    body.trace_id = trace_id;

    (status, Json(body)).into_response()
}
