pub mod book_card;
pub mod book_form;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod protected_layout;
pub mod search_bar;
pub mod toast;

pub use book_card::BookCard;
pub use book_form::BookForm;
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use protected_layout::RequiresLoggedIn;
pub use search_bar::SearchBar;
pub use toast::ToastView;
