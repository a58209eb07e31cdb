use crate::model::api::ApiErrorResponse;

/// Message shown when the request never reached the server.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to connect to server. Please check your internet connection or try again later.";

/// Classification of a failed API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server rejected the input (400).
    Validation,
    /// The referenced record does not exist (404).
    NotFound,
    /// The session is missing or not allowed (401/403).
    Unauthorized,
    /// Any other non-success status.
    Server,
    /// The request could not be sent.
    Network,
    /// A success response could not be decoded, or a request could not be encoded.
    Decode,
}

impl ApiErrorKind {
    pub fn from_status(status: u64) -> Self {
        match status {
            400 | 422 => Self::Validation,
            401 | 403 => Self::Unauthorized,
            404 => Self::NotFound,
            _ => Self::Server,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// HTTP status, `0` when no response was received.
    pub status: u64,
    pub message: String,
    /// Field-level messages from a validation failure.
    pub errors: Vec<String>,
}

impl ApiError {
    /// Builds an error from a non-success status and its error envelope.
    pub fn from_response(status: u64, body: ApiErrorResponse) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            message: body.message,
            errors: body.errors.unwrap_or_default(),
        }
    }

    /// Builds an error from a non-success status whose body was not an envelope.
    pub fn from_status(status: u64, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn network() -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: 0,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            errors: Vec::new(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            status: 0,
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses() {
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(502), ApiErrorKind::Server);
    }

    #[test]
    fn keeps_envelope_message_and_field_errors() {
        let body = ApiErrorResponse::new(
            "Validation errors occurred.",
            Some(vec!["Title is required".to_string()]),
        );

        let err = ApiError::from_response(400, body);

        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(err.message, "Validation errors occurred.");
        assert_eq!(err.errors, vec!["Title is required".to_string()]);
    }

    #[test]
    fn network_error_uses_connectivity_message() {
        let err = ApiError::network();

        assert_eq!(err.kind, ApiErrorKind::Network);
        assert_eq!(err.status, 0);
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    }
}
