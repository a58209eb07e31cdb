use dioxus::prelude::*;

use crate::client::{
    component::{BookCard, Page, SearchBar},
    constant::SITE_NAME,
    router::Route,
    store::book::BookState,
};

#[cfg(feature = "web")]
use crate::client::store::book::actions::{fetch_books, use_books_loaded};

#[component]
pub fn Home() -> Element {
    let store = use_context::<Signal<BookState>>();

    #[cfg(feature = "web")]
    use_books_loaded(store);

    let state = store.read();
    let books: Vec<_> = state.filtered().into_iter().cloned().collect();
    let total = state.books.len();
    let loading = state.loading;
    let fetched = state.fetched;
    let error = state.error.clone();
    let load_failed = state.load_error().is_some();
    let has_query = !state.search_query.trim().is_empty();
    drop(state);

    let on_retry = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        spawn(async move {
            let _ = fetch_books(store).await;
        });
    };

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            div {
                class: "flex flex-col md:flex-row md:items-center justify-between gap-4",
                h1 {
                    class: "text-2xl font-bold",
                    "My Books"
                }
                SearchBar {}
            }

            if let Some(err) = error {
                div {
                    class: "alert alert-error flex justify-between",
                    span { "{err.message}" }
                    if load_failed {
                        button {
                            r#type: "button",
                            class: "btn btn-sm",
                            disabled: loading,
                            onclick: on_retry,
                            "Retry"
                        }
                    }
                }
            }

            if loading && !fetched {
                div {
                    class: "flex justify-center py-16",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else if fetched && total == 0 {
                div {
                    class: "flex flex-col items-center gap-4 py-16 text-center",
                    p {
                        class: "text-lg opacity-50",
                        "No books yet"
                    }
                    Link {
                        to: Route::AddBook {},
                        class: "btn btn-primary",
                        "Add your first book"
                    }
                }
            } else if fetched && books.is_empty() && has_query {
                div {
                    class: "py-16 text-center opacity-50",
                    "No books match your search"
                }
            } else {
                div {
                    class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                    for book in books {
                        BookCard { key: "{book.id}", book }
                    }
                }
            }
        }
    }
}
