use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaMagnifyingGlass, Icon};

use crate::client::store::book::BookState;

#[component]
pub fn SearchBar() -> Element {
    let mut store = use_context::<Signal<BookState>>();
    let query = store.read().search_query.clone();

    rsx!(
        label {
            class: "input input-bordered flex items-center gap-2 w-full md:max-w-md",
            Icon {
                width: 16,
                height: 16,
                icon: FaMagnifyingGlass
            }
            input {
                r#type: "search",
                class: "grow",
                placeholder: "Search by title, author or description",
                value: "{query}",
                oninput: move |evt| store.write().set_search_query(evt.value()),
            }
        }
    )
}
