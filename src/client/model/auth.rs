use dioxus::prelude::*;

use crate::{
    client::model::error::ApiError,
    model::user::{AuthStatusDto, UserDto},
};

#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    /// The server has no identity provider configured
    Disabled,
    /// User is authenticated
    Authenticated(UserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<AuthStatusDto> for AuthState {
    fn from(status: AuthStatusDto) -> Self {
        match (status.enabled, status.user) {
            (false, _) => AuthState::Disabled,
            (true, Some(user)) => AuthState::Authenticated(user),
            (true, None) => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    /// Whether book views may render: signed in, or authentication is off
    pub fn can_view_books(&self) -> bool {
        matches!(self, AuthState::Authenticated(_) | AuthState::Disabled)
    }

    /// Whether login/logout links should be offered
    pub fn auth_enabled(&self) -> bool {
        matches!(self, AuthState::Authenticated(_) | AuthState::NotLoggedIn)
    }

    /// Get the authenticated user, if any
    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserDto {
        UserDto {
            id: "auth0|1".to_string(),
            name: "Reader".to_string(),
            email: None,
        }
    }

    #[test]
    fn disabled_auth_allows_book_views() {
        let state = AuthState::from(AuthStatusDto {
            enabled: false,
            user: None,
        });

        assert_eq!(state, AuthState::Disabled);
        assert!(state.can_view_books());
        assert!(!state.auth_enabled());
    }

    #[test]
    fn enabled_auth_requires_user() {
        let anonymous = AuthState::from(AuthStatusDto {
            enabled: true,
            user: None,
        });
        let signed_in = AuthState::from(AuthStatusDto {
            enabled: true,
            user: Some(user()),
        });

        assert!(!anonymous.can_view_books());
        assert!(signed_in.can_view_books());
        assert_eq!(signed_in.user(), Some(&user()));
    }

    /// The header offers login only when a provider exists and nobody is signed in.
    #[test]
    fn login_offered_only_when_enabled_and_anonymous() {
        let offers_login = |state: &AuthState| state.auth_enabled() && state.user().is_none();

        assert!(offers_login(&AuthState::NotLoggedIn));
        assert!(!offers_login(&AuthState::Authenticated(user())));
        assert!(!offers_login(&AuthState::Disabled));
        assert!(!offers_login(&AuthState::Initializing));
    }
}
