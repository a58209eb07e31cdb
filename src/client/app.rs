use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME, model::auth::AuthContext, router::Route, store::book::BookState,
};

#[cfg(feature = "web")]
use crate::client::{api::auth::get_auth_status, model::auth::AuthState};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context_provider(AuthContext::new);
    use_context_provider(|| Signal::new(BookState::default()));

    // Fetch authentication status on first load
    #[cfg(feature = "web")]
    use_future(move || async move {
        let state = match get_auth_status().await {
            Ok(status) => AuthState::from(status),
            Err(err) => {
                dioxus_logger::tracing::error!("Failed to fetch auth status: {}", err);
                AuthState::Error(err)
            }
        };
        auth_context.set(state);
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Keep track of the books you read"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
