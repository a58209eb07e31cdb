use dioxus::prelude::*;

use crate::{client::router::Route, model::book::BookDto};

/// Maximum description characters shown on a card.
const PREVIEW_LEN: usize = 120;

fn preview(description: &str) -> String {
    if description.chars().count() <= PREVIEW_LEN {
        return description.to_string();
    }

    let cut: String = description.chars().take(PREVIEW_LEN).collect();
    format!("{}…", cut.trim_end())
}

#[component]
pub fn BookCard(book: BookDto) -> Element {
    let description = book.description.as_deref().map(preview);

    rsx!(
        Link {
            to: Route::BookDetail { id: book.id },
            class: "card bg-base-200 hover:bg-base-300 transition-colors",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "{book.title}"
                }
                p {
                    class: "opacity-70",
                    "by {book.author}"
                }
                if let Some(description) = description {
                    p {
                        class: "text-sm opacity-60",
                        "{description}"
                    }
                }
            }
        }
    )
}
