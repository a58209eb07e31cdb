use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::user::AuthStatusDto,
};

/// Fetches whether authentication is enabled and who is signed in
pub async fn get_auth_status() -> Result<AuthStatusDto, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_response(response).await
}
