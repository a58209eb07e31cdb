use dioxus::prelude::*;

use crate::client::store::book::{BookState, ToastKind};

/// Renders the store's current toast in the corner of the screen.
#[component]
pub fn ToastView() -> Element {
    let mut store = use_context::<Signal<BookState>>();

    let Some(toast) = store.read().toast.clone() else {
        return rsx! {};
    };

    let alert_class = match toast.kind {
        ToastKind::Success => "alert-success",
        ToastKind::Error => "alert-error",
        ToastKind::Info => "alert-info",
    };

    rsx!(
        div {
            class: "toast toast-end toast-bottom z-30",
            div {
                class: "alert {alert_class} flex justify-between gap-4",
                role: "status",
                span { "{toast.message}" }
                button {
                    r#type: "button",
                    class: "btn btn-sm btn-circle btn-ghost",
                    onclick: move |_| store.write().hide_toast(),
                    "✕"
                }
            }
        }
    )
}
