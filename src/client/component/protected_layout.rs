use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Renders its child routes only once book views are allowed.
///
/// Book views are allowed when the user is signed in or the server has
/// authentication disabled. Anonymous users are sent to the landing page.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if matches!(&*auth_context.read(), AuthState::NotLoggedIn) {
            nav.push(Route::Landing {});
        }
    });

    let state = auth_context.read();

    rsx! {
        match &*state {
            AuthState::Initializing => rsx! {
                LoadingPage {  }
            },
            AuthState::Authenticated(_) | AuthState::Disabled => rsx! {
                Outlet::<Route> {}
            },
            AuthState::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            // Render nothing while redirecting via the use_effect
            AuthState::NotLoggedIn => rsx! {},
        }
    }
}
