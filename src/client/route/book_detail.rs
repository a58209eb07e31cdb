use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPenToSquare, FaTrash},
    Icon,
};

use crate::client::{
    component::{ConfirmationModal, ErrorPage, LoadingPage, Page},
    constant::SITE_NAME,
    model::error::ApiError,
    router::Route,
    store::book::BookState,
};

#[cfg(feature = "web")]
use crate::client::store::book::actions::{delete_book, use_books_loaded};

#[component]
pub fn BookDetail(id: i32) -> Element {
    let store = use_context::<Signal<BookState>>();
    let nav = navigator();

    #[cfg(feature = "web")]
    use_books_loaded(store);

    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<ApiError>);

    // Reset the error whenever the modal is reopened
    use_effect(move || {
        if show_delete_modal() {
            delete_error.set(None);
        }
    });

    let on_confirm = move |_: ()| {
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_book(store, id).await {
                Ok(()) => {
                    show_delete_modal.set(false);
                    nav.push(Route::Home {});
                }
                Err(err) => delete_error.set(Some(err)),
            }
            is_deleting.set(false);
        });
    };

    let state = store.read();
    let book = state.get(id).cloned();
    let fetched = state.fetched;
    let load_error = state.load_error().cloned();
    drop(state);

    let Some(book) = book else {
        return rsx! {
            if let Some(err) = load_error {
                ErrorPage { status: err.status, message: err.message }
            } else if fetched {
                ErrorPage { status: 404, message: format!("Book with ID {} was not found", id) }
            } else {
                LoadingPage {}
            }
        };
    };

    rsx! {
        Title { "{book.title} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "card bg-base-200 w-full max-w-2xl",
                div {
                    class: "card-body gap-4",
                    h1 {
                        class: "card-title text-3xl",
                        "{book.title}"
                    }
                    p {
                        class: "text-lg opacity-70",
                        "by {book.author}"
                    }
                    if let Some(description) = book.description.clone() {
                        p {
                            class: "whitespace-pre-line",
                            "{description}"
                        }
                    } else {
                        p {
                            class: "italic opacity-50",
                            "No description"
                        }
                    }
                    div {
                        class: "card-actions justify-between mt-4",
                        Link {
                            to: Route::Home {},
                            class: "btn btn-ghost",
                            "Back"
                        }
                        div {
                            class: "flex gap-2",
                            Link {
                                to: Route::EditBook { id },
                                class: "btn btn-outline flex gap-2 items-center",
                                Icon {
                                    width: 14,
                                    height: 14,
                                    icon: FaPenToSquare
                                }
                                "Edit"
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-error flex gap-2 items-center",
                                onclick: move |_| show_delete_modal.set(true),
                                Icon {
                                    width: 14,
                                    height: 14,
                                    icon: FaTrash
                                }
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Book".to_string(),
            message: rsx! {
                p {
                    "Are you sure you want to delete "
                    span { class: "font-bold", "{book.title}" }
                    "? This cannot be undone."
                }
            },
            error: delete_error().map(|err| err.message),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm,
        }
    }
}
