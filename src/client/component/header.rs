use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBook, FaPlus},
    Icon,
};

use crate::client::{
    constant::SITE_NAME,
    model::auth::AuthContext,
    router::Route,
};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();

    let user_name = state.user().map(|u| u.name.clone());
    let can_view_books = state.can_view_books();
    let show_login = state.auth_enabled() && user_name.is_none();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaBook
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if can_view_books {
                Link {
                    to: Route::AddBook {},
                    class: "btn btn-primary flex gap-2 items-center",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaPlus
                    }
                    p { "Add Book" }
                }
            }
            if let Some(name) = user_name {
                p {
                    class: "hidden md:block opacity-70",
                    "{name}"
                }
                a {
                    href: "/api/auth/logout",
                    div {
                        class: "btn btn-outline",
                        p {
                            "Logout"
                        }
                    }
                }
            } else if show_login {
                a {
                    href: "/api/auth/login",
                    div {
                        class: "btn btn-outline",
                        p {
                            "Login"
                        }
                    }
                }
            }
        }
    })
}
