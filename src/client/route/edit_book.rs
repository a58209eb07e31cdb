use dioxus::prelude::*;

use crate::{
    client::{
        component::{BookForm, ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::book::BookState,
    },
    model::book::BookFields,
};

#[cfg(feature = "web")]
use crate::{
    client::store::book::actions::{update_book, use_books_loaded},
    model::book::UpdateBookDto,
};

#[component]
pub fn EditBook(id: i32) -> Element {
    let store = use_context::<Signal<BookState>>();
    let nav = navigator();

    #[cfg(feature = "web")]
    use_books_loaded(store);

    let mut is_submitting = use_signal(|| false);
    let mut server_error = use_signal(|| None::<ApiError>);

    let on_submit = move |fields: BookFields| {
        is_submitting.set(true);
        server_error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = UpdateBookDto {
                id,
                title: fields.title,
                author: fields.author,
                description: fields.description,
            };

            match update_book(store, payload).await {
                Ok(book) => {
                    nav.push(Route::BookDetail { id: book.id });
                }
                Err(err) => server_error.set(Some(err)),
            }
            is_submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = (fields, store);
    };

    let state = store.read();
    let book = state.get(id).cloned();
    let fetched = state.fetched;
    let load_error = state.load_error().cloned();
    drop(state);

    rsx! {
        Title { "Edit Book | {SITE_NAME}" }
        if let Some(book) = book {
            Page {
                class: "flex flex-col items-center gap-6",
                h1 {
                    class: "text-2xl font-bold w-full max-w-2xl",
                    "Edit Book"
                }
                BookForm {
                    key: "{book.id}",
                    title: book.title.clone(),
                    author: book.author.clone(),
                    description: book.description.clone().unwrap_or_default(),
                    submit_label: "Save Changes".to_string(),
                    submitting_label: "Saving...".to_string(),
                    is_submitting: is_submitting(),
                    server_error: server_error(),
                    on_submit,
                    on_cancel: move |_| {
                        nav.push(Route::BookDetail { id });
                    },
                }
            }
        } else if let Some(err) = load_error {
            ErrorPage { status: err.status, message: err.message }
        } else if fetched {
            ErrorPage { status: 404, message: format!("Book with ID {} was not found", id) }
        } else {
            LoadingPage {}
        }
    }
}
