use axum::http::StatusCode;
use oauth2::{
    basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for an access token failed.
    ///
    /// Results in a 502 Bad Gateway response as the identity provider rejected
    /// or failed the request.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

impl AuthError {
    /// HTTP status code reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::CsrfValidationFailed => StatusCode::BAD_REQUEST,
            Self::TokenExchange(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// User-facing message; never includes provider error details.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::CsrfValidationFailed => "There was an issue logging you in, please try again.",
            Self::TokenExchange(_) => "The identity provider could not complete your login.",
        }
    }
}

impl
    From<
        RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    > for AuthError
{
    fn from(
        err: RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ) -> Self {
        Self::TokenExchange(err.to_string())
    }
}
