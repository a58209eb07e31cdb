mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db, &config).await?;
        let http_client = startup::setup_reqwest_client()?;
        let auth = config
            .auth
            .as_ref()
            .map(startup::setup_oauth_client)
            .transpose()?;
        let cors = startup::cors_layer(&config)?;

        if auth.is_none() {
            tracing::info!("No AUTH_* variables set, authentication is disabled");
        }

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(App);
        let mut server_routes =
            server::router::build(AppState::new(db, http_client, auth)).layer(session);
        if let Some(cors) = cors {
            server_routes = server_routes.layer(cors);
        }
        router = router.merge(server_routes);

        Ok(router)
    })
}
