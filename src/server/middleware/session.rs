//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! - `AuthSession` - Signed-in user identity
//! - `CsrfSession` - CSRF token management for the OAuth flow

use tower_sessions::Session;

use crate::{model::user::UserDto, server::error::AppError};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Stores the identity returned by the external identity provider once the OAuth
/// callback succeeds. No user table exists; the session is the only record.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the signed-in user in the session.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Arguments
    /// - `user` - Identity returned by the provider
    ///
    /// # Returns
    /// - `Ok(())` - User successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: &UserDto) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the signed-in user from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<UserDto>, AppError> {
        Ok(self.session.get::<UserDto>(SESSION_AUTH_USER).await?)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove all session data including authentication
    /// state and any pending CSRF token.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Arguments
    /// - `token` - The CSRF token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::context::TestContext;

    fn user() -> UserDto {
        UserDto {
            id: "auth0|123".to_string(),
            name: "Reader".to_string(),
            email: Some("reader@example.com".to_string()),
        }
    }

    #[tokio::test]
    async fn stores_and_clears_user() -> Result<(), AppError> {
        let mut test = TestContext::new();
        let session = test.session().await.unwrap();
        let auth = AuthSession::new(session);

        assert_eq!(auth.get_user().await?, None);

        auth.set_user(&user()).await?;
        assert_eq!(auth.get_user().await?, Some(user()));

        auth.clear().await;
        assert_eq!(auth.get_user().await?, None);

        Ok(())
    }

    /// A CSRF token can only be taken once.
    #[tokio::test]
    async fn csrf_token_is_single_use() -> Result<(), AppError> {
        let mut test = TestContext::new();
        let session = test.session().await.unwrap();
        let csrf = CsrfSession::new(session);

        csrf.set_token("state-token".to_string()).await?;

        assert_eq!(csrf.take_token().await?, Some("state-token".to_string()));
        assert_eq!(csrf.take_token().await?, None);

        Ok(())
    }
}
