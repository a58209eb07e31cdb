use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaBookOpen, Icon};

use crate::client::{
    component::{ErrorPage, LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Landing() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    // Skip the welcome page when book views are already available
    use_effect(move || {
        if auth_context.read().can_view_books() {
            nav.replace(Route::Home {});
        }
    });

    let state = auth_context.read();

    rsx! {
        Title { "Welcome | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing | AuthState::Authenticated(_) | AuthState::Disabled => rsx! {
                LoadingPage {}
            },
            AuthState::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            AuthState::NotLoggedIn => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full text-center",
                    div {
                        class: "flex flex-col items-center gap-4",
                        Icon {
                            width: 96,
                            height: 96,
                            icon: FaBookOpen
                        }
                        h1 {
                            class: "text-3xl font-bold",
                            "Welcome to {SITE_NAME}"
                        }
                        p {
                            class: "opacity-70 max-w-md",
                            "Keep track of the books you read. Log in to see your collection."
                        }
                    }
                    a {
                        href: "/api/auth/login",
                        div {
                            class: "btn btn-primary",
                            "Log in"
                        }
                    }
                }
            }
        }
    }
}
