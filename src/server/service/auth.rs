use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use serde::Deserialize;
use url::Url;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, AppError},
        state::AuthProvider,
    },
};

/// Claims read from the identity provider's userinfo endpoint.
///
/// Only `sub` is guaranteed by OpenID Connect; the display name falls back from
/// `name` to `nickname` to `email` to `sub`.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserInfo {
    /// Converts provider claims into the session user.
    pub fn into_dto(self) -> UserDto {
        let name = self
            .name
            .clone()
            .or_else(|| self.nickname.clone())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.sub.clone());

        UserDto {
            id: self.sub,
            name,
            email: self.email,
        }
    }
}

/// Service for the OAuth2 authorization code flow against an external provider.
///
/// Users are never persisted; the identity returned by `callback` is stored in
/// the session by the controller.
pub struct AuthService<'a> {
    /// HTTP client for provider requests.
    pub http_client: &'a reqwest::Client,
    /// Configured provider endpoints.
    pub provider: &'a AuthProvider,
}

impl<'a> AuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, provider: &'a AuthProvider) -> Self {
        Self {
            http_client,
            provider,
        }
    }

    /// Generates the provider login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - The authorization URL and the CSRF state token to store
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.provider
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url()
    }

    /// Exchanges an authorization code and fetches the signed-in user.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the provider callback
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The authenticated user
    /// - `Err(AppError::AuthErr(TokenExchange))` - The provider rejected the code
    /// - `Err(AppError::ReqwestErr)` - Userinfo request or decoding failed
    pub async fn callback(&self, authorization_code: String) -> Result<UserDto, AppError> {
        let token = self
            .provider
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let user = self.fetch_user_info(&token).await?;

        Ok(user.into_dto())
    }

    /// Retrieves the user's claims using the provided access token
    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<UserInfo, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(&self.provider.userinfo_url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(user_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_through_claims() {
        let info = UserInfo {
            sub: "auth0|1".to_string(),
            name: None,
            nickname: Some("reader".to_string()),
            email: Some("reader@example.com".to_string()),
        };

        let user = info.into_dto();

        assert_eq!(user.id, "auth0|1");
        assert_eq!(user.name, "reader");
        assert_eq!(user.email.as_deref(), Some("reader@example.com"));
    }

    #[test]
    fn display_name_defaults_to_subject() {
        let info: UserInfo = serde_json::from_str(r#"{"sub":"abc"}"#).unwrap();

        assert_eq!(info.into_dto().name, "abc");
    }
}
