//! Local mirror of the book collection.
//!
//! `BookState` only holds data and its synchronous transitions; the network calls
//! that drive it live in `actions`.

#[cfg(feature = "web")]
pub mod actions;

use crate::{client::model::error::ApiError, model::book::BookDto};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A transient notification.
///
/// `id` increases with every toast so a pending auto-dismiss only hides the toast
/// it was started for.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookState {
    pub books: Vec<BookDto>,
    pub loading: bool,
    pub error: Option<ApiError>,
    /// Set once the collection has been loaded at least once.
    pub fetched: bool,
    /// Whether `error` came from loading the collection rather than a mutation.
    load_failed: bool,
    pub search_query: String,
    pub toast: Option<Toast>,
    next_toast_id: u64,
}

impl BookState {
    /// Marks a request as in flight.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.load_failed = false;
    }

    /// Replaces the collection with a fresh server copy.
    pub fn fetched(&mut self, books: Vec<BookDto>) {
        self.books = books;
        self.fetched = true;
        self.finish();
    }

    pub fn added(&mut self, book: BookDto) {
        self.books.push(book);
        self.finish();
    }

    /// Patches the record with a matching id, leaving order unchanged.
    pub fn updated(&mut self, book: BookDto) {
        match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book,
            None => self.books.push(book),
        }
        self.finish();
    }

    pub fn removed(&mut self, id: i32) {
        self.books.retain(|b| b.id != id);
        self.finish();
    }

    /// Records a failed mutation. The collection is left as it was.
    pub fn failed(&mut self, error: ApiError) {
        self.loading = false;
        self.error = Some(error);
        self.load_failed = false;
    }

    /// Records a failed load of the collection.
    ///
    /// Unlike a failed mutation this stops `needs_load` from requesting again
    /// until the user retries.
    pub fn fetch_failed(&mut self, error: ApiError) {
        self.failed(error);
        self.load_failed = true;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.load_failed = false;
    }

    /// Whether the collection still has to be requested from the server.
    pub fn needs_load(&self) -> bool {
        !self.fetched && !self.loading && !self.load_failed
    }

    /// The error from the last load attempt, if that attempt failed.
    pub fn load_error(&self) -> Option<&ApiError> {
        self.error.as_ref().filter(|_| self.load_failed)
    }

    pub fn get(&self, id: i32) -> Option<&BookDto> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Books whose title, author or description contain the search query.
    ///
    /// Matching is case-insensitive on the trimmed query; an empty query matches
    /// every book.
    pub fn filtered(&self) -> Vec<&BookDto> {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return self.books.iter().collect();
        }

        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&query)
                    || b.author.to_lowercase().contains(&query)
                    || b.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Shows a toast, replacing any current one, and returns its id.
    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        self.toast = Some(Toast {
            id: self.next_toast_id,
            kind,
            message: message.into(),
        });
        self.next_toast_id
    }

    pub fn hide_toast(&mut self) {
        self.toast = None;
    }

    /// Hides the toast only if it is still the one identified by `id`.
    pub fn expire_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }

    fn finish(&mut self) {
        self.loading = false;
        self.error = None;
        self.load_failed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::model::error::ApiErrorKind;

    fn book(id: i32, title: &str, author: &str, description: Option<&str>) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.map(str::to_string),
        }
    }

    fn library() -> BookState {
        let mut state = BookState::default();
        state.fetched(vec![
            book(1, "1984", "George Orwell", Some("Dystopian surveillance")),
            book(2, "Emma", "Jane Austen", None),
            book(3, "Dune", "Frank Herbert", Some("Desert planet")),
        ]);
        state
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut state = BookState::default();
        state.failed(ApiError::network());

        state.begin();

        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn fetched_replaces_collection() {
        let mut state = library();
        state.begin();

        state.fetched(vec![book(9, "Solo", "One", None)]);

        assert!(state.fetched);
        assert!(!state.loading);
        assert_eq!(state.books.len(), 1);
        assert_eq!(state.books[0].id, 9);
    }

    #[test]
    fn added_appends() {
        let mut state = library();

        state.added(book(4, "Beloved", "Toni Morrison", None));

        assert_eq!(state.books.len(), 4);
        assert_eq!(state.books[3].title, "Beloved");
    }

    #[test]
    fn updated_patches_in_place() {
        let mut state = library();

        state.updated(book(2, "Persuasion", "Jane Austen", None));

        assert_eq!(state.books.len(), 3);
        assert_eq!(state.books[1].title, "Persuasion");
        assert_eq!(state.get(2).map(|b| b.title.as_str()), Some("Persuasion"));
    }

    #[test]
    fn removed_filters_out_record() {
        let mut state = library();

        state.removed(1);

        assert!(state.get(1).is_none());
        assert_eq!(state.books.len(), 2);
    }

    #[test]
    fn failed_keeps_books_and_records_error() {
        let mut state = library();
        state.begin();

        state.failed(ApiError::from_status(500, "boom"));

        assert!(!state.loading);
        assert_eq!(state.books.len(), 3);
        assert_eq!(state.error.as_ref().map(|e| e.kind), Some(ApiErrorKind::Server));

        state.clear_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn fresh_state_needs_load() {
        let mut state = BookState::default();
        assert!(state.needs_load());

        state.begin();
        assert!(!state.needs_load());

        state.fetched(Vec::new());
        assert!(!state.needs_load());
    }

    /// Opening the add form first and failing to save must not stop the list
    /// from loading later.
    #[test]
    fn failed_mutation_does_not_block_initial_load() {
        let mut state = BookState::default();
        state.begin();

        state.failed(ApiError::network());

        assert!(state.error.is_some());
        assert!(state.load_error().is_none());
        assert!(state.needs_load());
    }

    #[test]
    fn failed_load_waits_for_retry() {
        let mut state = BookState::default();
        state.begin();

        state.fetch_failed(ApiError::from_status(500, "boom"));

        assert!(!state.needs_load());
        assert_eq!(state.load_error().map(|e| e.status), Some(500));

        state.begin();
        assert!(state.load_error().is_none());

        state.fetched(vec![book(1, "1984", "George Orwell", None)]);
        assert!(state.fetched);
        assert!(!state.needs_load());
        assert!(state.error.is_none());
    }

    #[test]
    fn empty_or_blank_query_matches_everything() {
        let mut state = library();

        assert_eq!(state.filtered().len(), 3);

        state.set_search_query("   ");
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn filter_matches_title_author_and_description_case_insensitively() {
        let mut state = library();

        state.set_search_query("ORWELL");
        assert_eq!(state.filtered()[0].id, 1);

        state.set_search_query(" desert ");
        let ids: Vec<i32> = state.filtered().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3]);

        state.set_search_query("emma");
        assert_eq!(state.filtered()[0].id, 2);

        state.set_search_query("tolkien");
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn stale_toast_expiry_keeps_newer_toast() {
        let mut state = BookState::default();

        let first = state.show_toast(ToastKind::Success, "Book added");
        let second = state.show_toast(ToastKind::Error, "Failed");

        state.expire_toast(first);
        assert_eq!(state.toast.as_ref().map(|t| t.id), Some(second));

        state.expire_toast(second);
        assert!(state.toast.is_none());
    }

    #[test]
    fn hide_toast_dismisses_immediately() {
        let mut state = BookState::default();
        state.show_toast(ToastKind::Info, "Hello");

        state.hide_toast();

        assert!(state.toast.is_none());
    }
}
