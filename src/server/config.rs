use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://books.db?mode=rwc";
const DEFAULT_APP_URL: &str = "http://localhost:8080";

/// Connection details for the external OAuth2 identity provider.
///
/// Present only when every `AUTH_*` variable is set; authentication is disabled
/// otherwise.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub redirect_url: String,
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub cors_origin: Option<String>,
    pub auth: Option<AuthConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// The `AUTH_*` variables are all-or-nothing: if none are set authentication
    /// is disabled, if only some are set the first missing one is reported.
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration with defaults applied
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - Partial auth configuration
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_url = lookup("APP_URL")
            .unwrap_or_else(|| DEFAULT_APP_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        const AUTH_VARS: [&str; 5] = [
            "AUTH_CLIENT_ID",
            "AUTH_CLIENT_SECRET",
            "AUTH_AUTHORIZE_URL",
            "AUTH_TOKEN_URL",
            "AUTH_USERINFO_URL",
        ];

        let present = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let require = |key: &str| {
            present(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let auth = if AUTH_VARS.iter().any(|&key| present(key).is_some()) {
            Some(AuthConfig {
                client_id: require("AUTH_CLIENT_ID")?,
                client_secret: require("AUTH_CLIENT_SECRET")?,
                authorize_url: require("AUTH_AUTHORIZE_URL")?,
                token_url: require("AUTH_TOKEN_URL")?,
                userinfo_url: require("AUTH_USERINFO_URL")?,
                redirect_url: format!("{}/api/auth/callback", app_url),
            })
        } else {
            None
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            cors_origin: lookup("CORS_ORIGIN").filter(|v| !v.is_empty()),
            app_url,
            auth,
        })
    }
}
