use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiErrorResponse, ApiResponse},
        user::AuthStatusDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Client route shown after a successful login.
const LOGIN_REDIRECT: &str = "/home";
/// Client route shown after logout.
const LOGOUT_REDIRECT: &str = "/";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from the identity provider for token exchange.
    pub code: String,
}

/// Redirects to the identity provider's login page.
///
/// When authentication is disabled the user is sent straight to the book list.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the identity provider"),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(provider) = state.auth.as_ref() else {
        return Ok(Redirect::temporary(LOGIN_REDIRECT));
    };

    let auth_service = AuthService::new(&state.http_client, provider);
    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the OAuth flow and stores the user in the session.
///
/// # Returns
/// - `307 Temporary Redirect` - Login succeeded, redirect to the book list
/// - `400 Bad Request` - CSRF state mismatch
/// - `502 Bad Gateway` - The identity provider rejected the code
/// - `500 Internal Server Error` - Session or userinfo request failure
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Login succeeded"),
        (status = 400, description = "CSRF state mismatch", body = ApiErrorResponse),
        (status = 502, description = "Identity provider failure", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(provider) = state.auth.as_ref() else {
        return Ok(Redirect::temporary(LOGIN_REDIRECT));
    };

    validate_csrf(&session, &params.state).await?;

    let auth_service = AuthService::new(&state.http_client, provider);
    let user = auth_service.callback(params.code).await?;

    AuthSession::new(&session).set_user(&user).await?;

    tracing::info!("User {} logged in", user.id);

    Ok(Redirect::temporary(LOGIN_REDIRECT))
}

/// Clears the session and returns to the landing page.
///
/// With authentication disabled there is nothing to clear and the user is sent
/// to the book list instead.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out")
    ),
)]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    if state.auth.is_none() {
        return Redirect::temporary(LOGIN_REDIRECT);
    }

    AuthSession::new(&session).clear().await;

    Redirect::temporary(LOGOUT_REDIRECT)
}

/// Reports whether authentication is enabled and who is signed in.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authentication status", body = ApiResponse<AuthStatusDto>),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let status = match state.auth {
        Some(_) => AuthStatusDto {
            enabled: true,
            user: AuthSession::new(&session).get_user().await?,
        },
        None => AuthStatusDto {
            enabled: false,
            user: None,
        },
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(status, "Authentication status retrieved")),
    ))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if stored_state.as_deref() == Some(csrf_state) {
        return Ok(());
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
