use dioxus::prelude::*;

use crate::{
    client::{
        component::{BookForm, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::book::BookState,
    },
    model::book::BookFields,
};

#[cfg(feature = "web")]
use crate::{client::store::book::actions::add_book, model::book::CreateBookDto};

#[component]
pub fn AddBook() -> Element {
    let store = use_context::<Signal<BookState>>();
    let nav = navigator();

    let mut is_submitting = use_signal(|| false);
    let mut server_error = use_signal(|| None::<ApiError>);

    let on_submit = move |fields: BookFields| {
        is_submitting.set(true);
        server_error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = CreateBookDto {
                title: fields.title,
                author: fields.author,
                description: fields.description,
            };

            match add_book(store, payload).await {
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

    rsx! {
        Title { "Add Book | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-6",
            h1 {
                class: "text-2xl font-bold w-full max-w-2xl",
                "Add Book"
            }
            BookForm {
                submit_label: "Add Book".to_string(),
                submitting_label: "Adding...".to_string(),
                is_submitting: is_submitting(),
                server_error: server_error(),
                on_submit,
                on_cancel: move |_| {
                    nav.push(Route::Home {});
                },
            }
        }
    }
}
