use axum::http::HeaderValue;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use url::Url;

use crate::server::{
    config::{AuthConfig, Config},
    error::{config::ConfigError, AppError},
    state::AuthProvider,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after 7 days of inactivity. The cookie uses `SameSite=Lax` so it
/// is sent when the identity provider redirects back to the callback endpoint.
///
/// # Arguments
/// - `db` - Connected database whose pool also stores sessions
/// - `config` - Application configuration; an `https` app URL marks the cookie secure
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used for identity provider requests.
///
/// Redirects are disabled so a provider response cannot bounce requests to
/// arbitrary hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the configured identity provider.
///
/// # Arguments
/// - `auth` - Provider client credentials and endpoints
///
/// # Returns
/// - `Ok(AuthProvider)` - Provider ready for the login flow
/// - `Err(AppError::ConfigErr(InvalidUrl))` - One of the provider URLs failed to parse
pub fn setup_oauth_client(auth: &AuthConfig) -> Result<AuthProvider, AppError> {
    use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    let invalid = |var: &str| {
        let var = var.to_string();
        move |source| ConfigError::InvalidUrl { var, source }
    };

    let oauth_client = BasicClient::new(ClientId::new(auth.client_id.clone()))
        .set_client_secret(ClientSecret::new(auth.client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(auth.authorize_url.clone()).map_err(invalid("AUTH_AUTHORIZE_URL"))?,
        )
        .set_token_uri(TokenUrl::new(auth.token_url.clone()).map_err(invalid("AUTH_TOKEN_URL"))?)
        .set_redirect_uri(RedirectUrl::new(auth.redirect_url.clone()).map_err(invalid("APP_URL"))?);

    Url::parse(&auth.userinfo_url).map_err(invalid("AUTH_USERINFO_URL"))?;

    Ok(AuthProvider {
        oauth_client,
        userinfo_url: auth.userinfo_url.clone(),
    })
}

/// Creates the CORS layer for a configured allowed origin.
///
/// # Returns
/// - `Ok(Some(CorsLayer))` - `CORS_ORIGIN` is set; any method and header is allowed
/// - `Ok(None)` - `CORS_ORIGIN` is not set, same-origin only
/// - `Err(AppError::ConfigErr(InvalidUrl))` - `CORS_ORIGIN` is not a valid URL
pub fn cors_layer(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = config.cors_origin.as_deref() else {
        return Ok(None);
    };

    let origin = Url::parse(origin)
        .map_err(|source| ConfigError::InvalidUrl {
            var: "CORS_ORIGIN".to_string(),
            source,
        })?
        .origin()
        .ascii_serialization();

    let origin = HeaderValue::from_str(&origin)
        .map_err(|e| AppError::InternalError(format!("Invalid CORS origin: {}", e)))?;

    tracing::info!("Allowing cross-origin requests from {:?}", origin);

    Ok(Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cors_origin: Option<&str>) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            app_url: "http://localhost:8080".to_string(),
            cors_origin: cors_origin.map(str::to_string),
            auth: None,
        }
    }

    fn auth_config() -> AuthConfig {
        AuthConfig {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            authorize_url: "https://idp.example.com/authorize".to_string(),
            token_url: "https://idp.example.com/oauth/token".to_string(),
            userinfo_url: "https://idp.example.com/userinfo".to_string(),
            redirect_url: "http://localhost:8080/api/auth/callback".to_string(),
        }
    }

    #[test]
    fn cors_is_disabled_without_origin() {
        assert!(cors_layer(&config(None)).unwrap().is_none());
    }

    #[test]
    fn cors_rejects_invalid_origin() {
        let result = cors_layer(&config(Some("not a url")));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidUrl { ref var, .. })) if var == "CORS_ORIGIN"
        ));
    }

    #[test]
    fn cors_accepts_origin() {
        assert!(cors_layer(&config(Some("http://localhost:3000")))
            .unwrap()
            .is_some());
    }

    #[test]
    fn oauth_client_reports_invalid_token_url() {
        let mut auth = auth_config();
        auth.token_url = "::".to_string();

        let result = setup_oauth_client(&auth);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidUrl { ref var, .. })) if var == "AUTH_TOKEN_URL"
        ));
    }

    #[test]
    fn oauth_client_builds_from_valid_config() {
        let provider = setup_oauth_client(&auth_config()).unwrap();

        assert_eq!(provider.userinfo_url, "https://idp.example.com/userinfo");
    }
}
