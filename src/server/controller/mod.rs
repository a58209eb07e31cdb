//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into validated parameter types,
//! call the service layer and wrap results in `ApiResponse` envelopes. Failures are
//! returned as `AppError` and rendered by its `IntoResponse` implementation.

pub mod auth;
pub mod book;

#[cfg(test)]
mod test;
