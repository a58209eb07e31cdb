use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{AddBook, BookDetail, EditBook, Home, Landing, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Landing {},

        #[layout(RequiresLoggedIn)]
            #[route("/home")]
            Home {},

            #[route("/add")]
            AddBook {},

            #[route("/book/:id")]
            BookDetail { id: i32 },

            #[route("/book/:id/edit")]
            EditBook { id: i32 },
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
