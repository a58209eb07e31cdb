//! Network operations that keep `BookState` in sync with the server.
//!
//! Each action marks the store as loading, performs one API call, then either
//! patches the store from the server's response or records the error. Errors are
//! also returned so the calling view can react in place.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::book as api,
        constant::TOAST_DURATION_MS,
        model::error::ApiError,
        store::book::{BookState, ToastKind},
    },
    model::book::{BookDto, CreateBookDto, UpdateBookDto},
};

/// Shows a toast and schedules its dismissal.
pub fn notify(mut store: Signal<BookState>, kind: ToastKind, message: impl Into<String>) {
    let id = store.write().show_toast(kind, message);

    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        store.write().expire_toast(id);
    });
}

fn fail(mut store: Signal<BookState>, action: &str, err: ApiError) -> ApiError {
    tracing::error!("Failed to {}: {}", action, err);
    store.write().failed(err.clone());
    notify(store, ToastKind::Error, err.message.clone());
    err
}

fn fail_load(mut store: Signal<BookState>, err: ApiError) -> ApiError {
    tracing::error!("Failed to fetch books: {}", err);
    store.write().fetch_failed(err.clone());
    notify(store, ToastKind::Error, err.message.clone());
    err
}

pub async fn fetch_books(mut store: Signal<BookState>) -> Result<(), ApiError> {
    store.write().begin();

    match api::get_books().await {
        Ok(books) => {
            store.write().fetched(books);
            Ok(())
        }
        Err(err) => Err(fail_load(store, err)),
    }
}

pub async fn add_book(
    mut store: Signal<BookState>,
    payload: CreateBookDto,
) -> Result<BookDto, ApiError> {
    store.write().begin();

    match api::create_book(payload).await {
        Ok(book) => {
            store.write().added(book.clone());
            notify(store, ToastKind::Success, "Book added successfully");
            Ok(book)
        }
        Err(err) => Err(fail(store, "add book", err)),
    }
}

pub async fn update_book(
    mut store: Signal<BookState>,
    payload: UpdateBookDto,
) -> Result<BookDto, ApiError> {
    store.write().begin();

    match api::update_book(payload).await {
        Ok(book) => {
            store.write().updated(book.clone());
            notify(store, ToastKind::Success, "Book updated successfully");
            Ok(book)
        }
        Err(err) => Err(fail(store, "update book", err)),
    }
}

pub async fn delete_book(mut store: Signal<BookState>, id: i32) -> Result<(), ApiError> {
    store.write().begin();

    match api::delete_book(id).await {
        Ok(deleted) => {
            store.write().removed(deleted.id);
            notify(store, ToastKind::Success, "Book deleted successfully");
            Ok(())
        }
        Err(err) => Err(fail(store, "delete book", err)),
    }
}

/// Loads the collection once per session.
///
/// Skips the request when the books are already loaded, a request is in flight,
/// or the last load failed; a failed load is retried explicitly by the user.
/// Failed mutations do not count.
pub fn use_books_loaded(store: Signal<BookState>) {
    use_effect(move || {
        let should_fetch = store.read().needs_load();

        if should_fetch {
            spawn(async move {
                let _ = fetch_books(store).await;
            });
        }
    });
}
